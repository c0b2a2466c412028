/// The name generator: one language plus the entropy source that drives it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;

use crate::core::factory::{make_random_language_from, FactoryError};
use crate::core::name::NameError;
use crate::core::pool::PoolError;
use crate::core::presets::Catalog;
use crate::core::syllable::SyllableError;
use crate::schema::language::{Language, LanguageProfile, ProfileError};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("factory error: {0}")]
    Factory(#[from] FactoryError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("name error: {0}")]
    Name(#[from] NameError),
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("syllable error: {0}")]
    Syllable(#[from] SyllableError),
}

/// Where the builder gets its language from.
enum LanguageSource<'a> {
    Given(Language),
    Profile(String),
    Random(Catalog<'a>),
}

/// Seeded name generator. Built via `NameGenerator::builder()`.
///
/// The same seed and language source always yield the same names.
pub struct NameGenerator {
    language: Language,
    rng: StdRng,
    seed: u64,
}

/// Builder for constructing a `NameGenerator`.
pub struct NameGeneratorBuilder<'a> {
    seed: Option<u64>,
    source: LanguageSource<'a>,
}

impl NameGenerator {
    pub fn builder<'a>() -> NameGeneratorBuilder<'a> {
        NameGeneratorBuilder {
            seed: None,
            source: LanguageSource::Given(Language::default()),
        }
    }

    /// Compose a new, unique name for `key`.
    pub fn make_name(&mut self, key: &str) -> Result<String, GeneratorError> {
        Ok(self.language.make_name(key, &mut self.rng)?)
    }

    /// Compose `count` names for `key`.
    pub fn make_names(&mut self, key: &str, count: usize) -> Result<Vec<String>, GeneratorError> {
        let mut names = Vec::with_capacity(count);
        for _ in 0..count {
            names.push(self.make_name(key)?);
        }
        Ok(names)
    }

    pub fn get_word(&mut self, key: &str) -> Result<String, GeneratorError> {
        Ok(self.language.get_word(key, &mut self.rng)?)
    }

    pub fn get_morpheme(&mut self, key: &str) -> Result<String, GeneratorError> {
        Ok(self.language.get_morpheme(key, &mut self.rng)?)
    }

    pub fn make_syllable(&mut self) -> Result<String, GeneratorError> {
        Ok(self.language.make_syllable(&mut self.rng)?)
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn into_language(self) -> Language {
        self.language
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<'a> NameGeneratorBuilder<'a> {
    /// Seed the entropy source. Unseeded generators draw a seed from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use an existing language, pools and all.
    pub fn language(mut self, language: Language) -> Self {
        self.source = LanguageSource::Given(language);
        self
    }

    /// Start a fresh language from a profile.
    pub fn profile(self, profile: LanguageProfile) -> Self {
        self.language(Language::new(profile))
    }

    /// Load a profile from a RON file at build time.
    pub fn profile_path(mut self, path: &str) -> Self {
        self.source = LanguageSource::Profile(path.to_string());
        self
    }

    /// Draw a random language from the built-in presets.
    pub fn random_language(self) -> Self {
        self.random_language_from(Catalog::builtin())
    }

    /// Draw a random language from `catalog`.
    pub fn random_language_from(mut self, catalog: Catalog<'a>) -> Self {
        self.source = LanguageSource::Random(catalog);
        self
    }

    pub fn build(self) -> Result<NameGenerator, GeneratorError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let language = match self.source {
            LanguageSource::Given(language) => language,
            LanguageSource::Profile(path) => {
                Language::new(LanguageProfile::load_from_ron(Path::new(&path))?)
            }
            LanguageSource::Random(catalog) => make_random_language_from(&catalog, &mut rng)?,
        };

        Ok(NameGenerator {
            language,
            rng,
            seed,
        })
    }
}
