/// Random selection helpers: skewed choice, shuffling, and integer ranges.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cannot choose from an empty list")]
    Empty,
}

/// Pick an element, biased toward the front of the slice.
///
/// A uniform draw in `[0, 1)` is raised to `exponent` before being scaled
/// to an index, so an exponent above 1 favors earlier entries and an
/// exponent of exactly 1 is uniform.
pub fn choose_skewed<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    exponent: f64,
    rng: &mut R,
) -> Result<&'a T, SelectionError> {
    if items.is_empty() {
        return Err(SelectionError::Empty);
    }
    let fraction: f64 = rng.gen();
    let index = (fraction.powf(exponent) * items.len() as f64).floor() as usize;
    // powf can round up to 1.0 for fractions just below it
    Ok(&items[index.min(items.len() - 1)])
}

/// Unbiased in-place permutation (Fisher-Yates, last to first).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniform integer in `[low, high)`. Empty or inverted ranges collapse to `low`.
pub fn range_int<R: Rng + ?Sized>(low: usize, high: usize, rng: &mut R) -> usize {
    if high <= low {
        return low;
    }
    rng.gen_range(low..high)
}

/// Uppercase the first character, leaving the rest untouched.
///
/// A character whose uppercase form is more than one character (`ß`) stays
/// as it is, so capitalizing never changes the length.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}
