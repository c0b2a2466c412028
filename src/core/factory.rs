/// Language factory: ready-made configurations, either orthography-only or
/// drawn at random from a preset catalog.

use rand::Rng;
use thiserror::Error;

use crate::core::presets::Catalog;
use crate::core::random::{choose_skewed, range_int, shuffle, SelectionError};
use crate::schema::language::{Language, LanguageProfile};
use crate::schema::phonemes::Category;
use crate::schema::structure::{Structure, StructureError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    #[error("catalog table '{table}' is empty")]
    EmptyTable {
        table: &'static str,
        #[source]
        source: SelectionError,
    },
    #[error("catalog structure error: {0}")]
    Structure(#[from] StructureError),
}

/// Skew used when drawing phoneme sets and orthographies from a catalog.
const PRESET_EXPONENT: f64 = 2.0;
/// Highest syllable count a random language may allow.
const MAX_RANDOM_SYLLABLES: usize = 6;

/// The default language with spelling switched on.
///
/// One syllable per word and no pooling; suited to one-off syllables that
/// only need the default orthography.
pub fn make_ortho_language() -> Language {
    let mut profile = LanguageProfile::default();
    profile.bypass_orthography = false;
    Language::new(profile)
}

/// A random language drawn from the built-in catalog.
pub fn make_random_language<R: Rng + ?Sized>(rng: &mut R) -> Result<Language, FactoryError> {
    make_random_language_from(&Catalog::builtin(), rng)
}

/// A random language drawn from `catalog`.
///
/// Earlier phoneme sets and orthographies are favored; the structure is
/// drawn uniformly; the strictest restriction set always applies.
pub fn make_random_language_from<R: Rng + ?Sized>(
    catalog: &Catalog<'_>,
    rng: &mut R,
) -> Result<Language, FactoryError> {
    let mut profile = LanguageProfile::default();
    profile.bypass_orthography = false;
    profile.bypass_morpheme_pool = false;
    profile.bypass_word_pool = false;

    for (category, table, sets) in [
        (Category::Consonant, "consonant sets", catalog.consonant_sets),
        (Category::Vowel, "vowel sets", catalog.vowel_sets),
        (Category::Liquid, "liquid sets", catalog.liquid_sets),
        (Category::Sibilant, "sibilant sets", catalog.sibilant_sets),
        (Category::Final, "final sets", catalog.final_sets),
    ] {
        let chosen = pick(table, sets, PRESET_EXPONENT, rng)?;
        let mut symbols: Vec<char> = chosen.symbols.chars().collect();
        shuffle(&mut symbols, rng);
        profile
            .phonemes
            .set(category, &symbols.iter().collect::<String>());
    }

    let source = pick("structures", catalog.structures, 1.0, rng)?;
    profile.structure = Structure::parse(source)?;
    profile.restrictions = catalog.strictest_restrictions().to_vec();
    profile.consonant_orthography = pick(
        "consonant orthographies",
        catalog.consonant_orthographies,
        PRESET_EXPONENT,
        rng,
    )?
    .clone();
    profile.vowel_orthography = pick(
        "vowel orthographies",
        catalog.vowel_orthographies,
        PRESET_EXPONENT,
        rng,
    )?
    .clone();

    profile.min_syllables = range_int(1, 3, rng);
    if profile.structure.slots().len() < 3 {
        profile.min_syllables += 1;
    }
    profile.max_syllables = range_int(profile.min_syllables + 1, MAX_RANDOM_SYLLABLES + 1, rng);

    let joiners: Vec<char> = catalog.joiners.chars().collect();
    profile.joiner = pick("joiners", &joiners, 1.0, rng)?.to_string();

    Ok(Language::new(profile))
}

fn pick<'a, T, R: Rng + ?Sized>(
    table: &'static str,
    items: &'a [T],
    exponent: f64,
    rng: &mut R,
) -> Result<&'a T, FactoryError> {
    choose_skewed(items, exponent, rng).map_err(|source| FactoryError::EmptyTable { table, source })
}
