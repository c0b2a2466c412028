/// Language configuration: the tunable profile plus the vocabulary it has
/// accumulated so far.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::orthography::Orthography;
use super::phonemes::PhonemeInventory;
use super::pool::KeyedPool;
use super::restriction::Restriction;
use super::structure::Structure;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),
}

/// Default cap on attempts for every rejection-sampling loop.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Everything that shapes generation, independent of what has been generated.
///
/// Profiles load from and save to RON. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageProfile {
    pub phonemes: PhonemeInventory,
    pub structure: Structure,
    /// Skew applied when picking symbols; above 1 favors earlier symbols.
    pub exponent: f64,
    pub restrictions: Vec<Restriction>,
    pub consonant_orthography: Orthography,
    pub vowel_orthography: Orthography,
    pub bypass_orthography: bool,
    pub bypass_morpheme_pool: bool,
    /// Carried for configuration compatibility; generation does not consult it.
    pub bypass_word_pool: bool,
    pub min_syllables: usize,
    pub max_syllables: usize,
    pub joiner: String,
    pub min_chars: usize,
    pub max_chars: usize,
    /// Per-loop attempt cap. `0` retries forever.
    pub max_attempts: u32,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self {
            phonemes: PhonemeInventory::default(),
            structure: Structure::default(),
            exponent: 2.0,
            restrictions: Vec::new(),
            consonant_orthography: Orthography::default(),
            vowel_orthography: Orthography::default(),
            bypass_orthography: true,
            bypass_morpheme_pool: true,
            bypass_word_pool: true,
            min_syllables: 1,
            max_syllables: 1,
            joiner: " ".to_string(),
            min_chars: 5,
            max_chars: 12,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl LanguageProfile {
    /// Load a profile from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<LanguageProfile, ProfileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a profile from a RON string.
    pub fn parse_ron(input: &str) -> Result<LanguageProfile, ProfileError> {
        Ok(ron::from_str(input)?)
    }

    pub fn to_ron(&self) -> Result<String, ProfileError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Save this profile to a RON file.
    pub fn save_to_ron(&self, path: &Path) -> Result<(), ProfileError> {
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    pub(crate) fn gave_up(&self, attempts: u32) -> bool {
        self.max_attempts != 0 && attempts >= self.max_attempts
    }
}

/// An invented language: its profile plus the morphemes, words and names it
/// has handed out.
///
/// Vocabulary only grows. The genitive and definite-article morphemes are
/// fixed the first time a name is made and kept for the language's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Language {
    pub profile: LanguageProfile,
    pub(crate) morphemes: KeyedPool,
    pub(crate) words: KeyedPool,
    pub(crate) names: Vec<String>,
    pub(crate) genitive: Option<String>,
    pub(crate) definite: Option<String>,
}

impl Language {
    pub fn new(profile: LanguageProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn morphemes(&self) -> &KeyedPool {
        &self.morphemes
    }

    pub fn words(&self) -> &KeyedPool {
        &self.words
    }

    /// Every accepted name, in acceptance order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn genitive(&self) -> Option<&str> {
        self.genitive.as_deref()
    }

    pub fn definite(&self) -> Option<&str> {
        self.definite.as_deref()
    }
}

impl From<LanguageProfile> for Language {
    fn from(profile: LanguageProfile) -> Self {
        Language::new(profile)
    }
}
