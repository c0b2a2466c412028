//! WASM bindings for conlang-namegen, used by the browser name playground.

use wasm_bindgen::prelude::*;

use conlang_namegen::core::factory::make_ortho_language;
use conlang_namegen::core::generator::{NameGenerator, NameGeneratorBuilder};
use conlang_namegen::core::presets::{Catalog, SymbolSet};
use conlang_namegen::schema::language::LanguageProfile;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct SetInfo {
    name: String,
    symbols: String,
}

#[derive(serde::Serialize)]
struct PresetInfo {
    consonants: Vec<SetInfo>,
    vowels: Vec<SetInfo>,
    liquids: Vec<SetInfo>,
    sibilants: Vec<SetInfo>,
    finals: Vec<SetInfo>,
    structures: Vec<String>,
    restriction_sets: Vec<String>,
    consonant_orthographies: Vec<String>,
    vowel_orthographies: Vec<String>,
}

#[derive(serde::Serialize)]
struct LanguageInfo {
    structure: String,
    consonants: String,
    vowels: String,
    consonant_orthography: String,
    vowel_orthography: String,
    joiner: String,
    genitive: Option<String>,
    definite: Option<String>,
    names: Vec<String>,
}

fn set_info(sets: &[SymbolSet]) -> Vec<SetInfo> {
    sets.iter()
        .map(|set| SetInfo {
            name: set.name.to_string(),
            symbols: set.symbols.to_string(),
        })
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

/// Where a playground language comes from.
#[derive(Clone)]
enum Source {
    Random,
    Ortho,
    Profile(LanguageProfile),
}

// ---------------------------------------------------------------------------
// Playground
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct NamePlayground {
    generator: NameGenerator,
    source: Source,
}

#[wasm_bindgen]
impl NamePlayground {
    /// Create a playground with a random language drawn from the presets.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<NamePlayground, JsError> {
        Self::build(Source::Random, seed)
    }

    /// Create a playground with the default language and spelling switched on.
    pub fn ortho(seed: u64) -> Result<NamePlayground, JsError> {
        Self::build(Source::Ortho, seed)
    }

    /// Create a playground from a RON language profile.
    pub fn from_profile(profile_ron: &str, seed: u64) -> Result<NamePlayground, JsError> {
        let profile = LanguageProfile::parse_ron(profile_ron)
            .map_err(|e| JsError::new(&format!("Profile parse error: {e}")))?;
        Self::build(Source::Profile(profile), seed)
    }

    /// Compose one new name for `key` (use "" for no key).
    pub fn make_name(&mut self, key: &str) -> Result<String, JsError> {
        self.generator
            .make_name(key)
            .map_err(|e| JsError::new(&format!("Name error: {e}")))
    }

    /// Compose `count` names. Returns a JSON array of strings.
    pub fn make_names(&mut self, key: &str, count: usize) -> Result<String, JsError> {
        let names = self
            .generator
            .make_names(key, count)
            .map_err(|e| JsError::new(&format!("Name error: {e}")))?;
        to_json(&names)
    }

    /// Return a JSON description of the current language.
    pub fn language_info(&self) -> Result<String, JsError> {
        let language = self.generator.language();
        let profile = &language.profile;
        let info = LanguageInfo {
            structure: profile.structure.to_string(),
            consonants: profile.phonemes.consonants.iter().collect(),
            vowels: profile.phonemes.vowels.iter().collect(),
            consonant_orthography: profile.consonant_orthography.name.clone(),
            vowel_orthography: profile.vowel_orthography.name.clone(),
            joiner: profile.joiner.clone(),
            genitive: language.genitive().map(str::to_string),
            definite: language.definite().map(str::to_string),
            names: language.names().to_vec(),
        };
        to_json(&info)
    }

    /// Export the current language's profile as RON.
    pub fn profile_ron(&self) -> Result<String, JsError> {
        self.generator
            .language()
            .profile
            .to_ron()
            .map_err(|e| JsError::new(&format!("Profile error: {e}")))
    }

    /// Return a JSON description of the built-in presets.
    pub fn presets() -> Result<String, JsError> {
        let catalog = Catalog::builtin();
        let info = PresetInfo {
            consonants: set_info(catalog.consonant_sets),
            vowels: set_info(catalog.vowel_sets),
            liquids: set_info(catalog.liquid_sets),
            sibilants: set_info(catalog.sibilant_sets),
            finals: set_info(catalog.final_sets),
            structures: catalog.structures.iter().map(|s| s.to_string()).collect(),
            restriction_sets: catalog
                .restriction_sets
                .iter()
                .map(|set| set.name.clone())
                .collect(),
            consonant_orthographies: catalog
                .consonant_orthographies
                .iter()
                .map(|o| o.name.clone())
                .collect(),
            vowel_orthographies: catalog
                .vowel_orthographies
                .iter()
                .map(|o| o.name.clone())
                .collect(),
        };
        to_json(&info)
    }

    /// Start over with a new seed, forgetting every name made so far.
    ///
    /// Random playgrounds draw a new language; the others keep their profile.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        let fresh = Self::build(self.source.clone(), seed)?;
        self.generator = fresh.generator;
        Ok(())
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }
}

// Private helpers
impl NamePlayground {
    fn build(source: Source, seed: u64) -> Result<NamePlayground, JsError> {
        let builder: NameGeneratorBuilder<'static> = NameGenerator::builder().seed(seed);
        let builder = match &source {
            Source::Random => builder.random_language(),
            Source::Ortho => builder.language(make_ortho_language()),
            Source::Profile(profile) => builder.profile(profile.clone()),
        };
        let generator = builder
            .build()
            .map_err(|e| JsError::new(&format!("Language build error: {e}")))?;
        Ok(NamePlayground { generator, source })
    }
}
