use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::phonemes::{Category, PhonemeError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("syllable structure is empty")]
    Empty,
    #[error("invalid syllable structure '{source_text}': {error}")]
    InvalidTag {
        source_text: String,
        error: PhonemeError,
    },
}

/// One position in a syllable template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub category: Category,
    /// Included only on a coin flip when set (`C?`).
    pub optional: bool,
}

/// A parsed syllable-shape template such as `"S?CVC"`.
///
/// Each tag names a phoneme category; a tag immediately followed by `?` is
/// optional. Templates are validated on parse, so a `Structure` never holds
/// an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Structure {
    source: String,
    slots: Vec<Slot>,
}

impl Structure {
    pub fn parse(input: &str) -> Result<Structure, StructureError> {
        let chars: Vec<char> = input.chars().collect();
        if chars.is_empty() {
            return Err(StructureError::Empty);
        }

        let mut slots = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let category =
                Category::from_tag(chars[i]).map_err(|error| StructureError::InvalidTag {
                    source_text: input.to_string(),
                    error,
                })?;
            let optional = chars.get(i + 1) == Some(&'?');
            slots.push(Slot { category, optional });
            i += if optional { 2 } else { 1 };
        }

        Ok(Structure {
            source: input.to_string(),
            slots,
        })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Categories the template can draw from, in first-use order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for slot in &self.slots {
            if !seen.contains(&slot.category) {
                seen.push(slot.category);
            }
        }
        seen
    }
}

impl Default for Structure {
    fn default() -> Self {
        Structure {
            source: "CVC".to_string(),
            slots: vec![
                Slot {
                    category: Category::Consonant,
                    optional: false,
                },
                Slot {
                    category: Category::Vowel,
                    optional: false,
                },
                Slot {
                    category: Category::Consonant,
                    optional: false,
                },
            ],
        }
    }
}

impl TryFrom<String> for Structure {
    type Error = StructureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Structure::parse(&value)
    }
}

impl From<Structure> for String {
    fn from(structure: Structure) -> Self {
        structure.source
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_template() {
        let s = Structure::parse("CVC").unwrap();
        assert_eq!(s.slots().len(), 3);
        assert!(s.slots().iter().all(|slot| !slot.optional));
        assert_eq!(s, Structure::default());
    }

    #[test]
    fn parse_optional_markers() {
        let s = Structure::parse("S?CVL?C?").unwrap();
        let optional: Vec<bool> = s.slots().iter().map(|slot| slot.optional).collect();
        assert_eq!(optional, vec![true, false, false, true, true]);
        assert_eq!(s.slots()[0].category, Category::Sibilant);
        assert_eq!(s.slots()[3].category, Category::Liquid);
    }

    #[test]
    fn unknown_tag_fails() {
        let err = Structure::parse("CXV").unwrap_err();
        assert!(matches!(
            err,
            StructureError::InvalidTag {
                error: PhonemeError::UnknownCategory('X'),
                ..
            }
        ));
    }

    #[test]
    fn stray_marker_fails() {
        assert!(Structure::parse("?CV").is_err());
        assert!(Structure::parse("C??V").is_err());
    }

    #[test]
    fn empty_fails() {
        assert_eq!(Structure::parse(""), Err(StructureError::Empty));
    }

    #[test]
    fn categories_deduplicated() {
        let s = Structure::parse("C?L?VC").unwrap();
        assert_eq!(
            s.categories(),
            vec![Category::Consonant, Category::Liquid, Category::Vowel]
        );
    }

    #[test]
    fn ron_validates_on_load() {
        let s: Structure = ron::from_str("\"CVF?\"").unwrap();
        assert_eq!(s.as_str(), "CVF?");
        assert!(ron::from_str::<Structure>("\"CVQ\"").is_err());
    }
}
