/// Name composition: one or two words, an optional genitive linker and
/// definite article, checked against length bounds and every earlier name.

use rand::Rng;
use thiserror::Error;

use crate::core::pool::PoolError;
use crate::core::random::capitalize;
use crate::schema::language::Language;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("no acceptable name after {0} attempts")]
    Exhausted(u32),
}

/// Key of the morpheme used as the genitive linker ("X of Y").
pub const GENITIVE_KEY: &str = "of";
/// Key of the morpheme used as the definite article.
pub const DEFINITE_KEY: &str = "the";

const SINGLE_WORD_CHANCE: f64 = 0.5;
const KEYED_PART_CHANCE: f64 = 0.6;
const DIRECT_COMPOUND_CHANCE: f64 = 0.5;
const DEFINITE_CHANCE: f64 = 0.1;

/// Returns true if either name contains the other.
pub fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

impl Language {
    /// Compose a new name associated with `key`.
    ///
    /// The result is between `min_chars` and `max_chars` characters long and
    /// neither contains nor is contained in any name this language has
    /// already produced. It is recorded before being returned.
    pub fn make_name<R: Rng + ?Sized>(&mut self, key: &str, rng: &mut R) -> Result<String, NameError> {
        if self.genitive.is_none() {
            self.genitive = Some(self.get_morpheme(GENITIVE_KEY, rng)?);
        }
        if self.definite.is_none() {
            let article = self.get_morpheme(DEFINITE_KEY, rng)?;
            self.definite = Some(capitalize(&article));
        }
        let genitive = self.genitive.clone().unwrap_or_default();
        let definite = self.definite.clone().unwrap_or_default();

        let mut attempts = 0u32;
        loop {
            if self.profile.gave_up(attempts) {
                return Err(NameError::Exhausted(attempts));
            }
            attempts += 1;

            let joiner = self.profile.joiner.clone();
            let mut name = if rng.gen_bool(SINGLE_WORD_CHANCE) {
                capitalize(&self.get_word(key, rng)?)
            } else {
                let first_key = if rng.gen_bool(KEYED_PART_CHANCE) { key } else { "" };
                let first = capitalize(&self.get_word(first_key, rng)?);
                let second_key = if rng.gen_bool(KEYED_PART_CHANCE) { key } else { "" };
                let second = capitalize(&self.get_word(second_key, rng)?);
                if first == second {
                    continue;
                }
                if rng.gen_bool(DIRECT_COMPOUND_CHANCE) {
                    [first, second].join(&joiner)
                } else {
                    [first, genitive.clone(), second].join(&joiner)
                }
            };

            if rng.gen_bool(DEFINITE_CHANCE) {
                name = [definite.clone(), name].join(&joiner);
            }

            let length = name.chars().count();
            if length < self.profile.min_chars || length > self.profile.max_chars {
                continue;
            }

            if self.names.iter().any(|earlier| overlaps(&name, earlier)) {
                continue;
            }

            self.names.push(name.clone());
            return Ok(name);
        }
    }
}
