/// Orthography: how phoneme symbols are written out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Substitutions applied when no caller-supplied layer claims a symbol.
pub const DEFAULT_SPELLINGS: &[(char, &str)] = &[
    ('ʃ', "sh"),
    ('ʒ', "zh"),
    ('ʧ', "ch"),
    ('ʤ', "j"),
    ('ŋ', "ng"),
    ('j', "y"),
    ('x', "kh"),
    ('ɣ', "gh"),
    ('ʔ', "‘"),
    ('A', "á"),
    ('E', "é"),
    ('I', "í"),
    ('O', "ó"),
    ('U', "ú"),
];

/// The built-in bottom layer shared by every language.
pub static DEFAULT_ORTHOGRAPHY: LazyLock<Orthography> =
    LazyLock::new(|| Orthography::from_pairs("Default", DEFAULT_SPELLINGS));

/// A named symbol-to-text substitution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orthography {
    pub name: String,
    #[serde(default)]
    pub map: BTreeMap<char, String>,
}

impl Default for Orthography {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            map: BTreeMap::new(),
        }
    }
}

impl Orthography {
    pub fn from_pairs(name: &str, pairs: &[(char, &str)]) -> Self {
        Self {
            name: name.to_string(),
            map: pairs
                .iter()
                .map(|(symbol, text)| (*symbol, text.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.map.get(&symbol).map(String::as_str)
    }
}

/// Spell a raw syllable through an ordered stack of orthography layers.
///
/// For each symbol the first layer that maps it wins; layers are never
/// merged. Symbols no layer knows pass through unchanged.
pub fn spell(raw: &str, layers: &[&Orthography]) -> String {
    let mut out = String::with_capacity(raw.len());
    for symbol in raw.chars() {
        match layers.iter().find_map(|layer| layer.get(symbol)) {
            Some(text) => out.push_str(text),
            None => out.push(symbol),
        }
    }
    out
}
