use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhonemeError {
    #[error("unknown phoneme category '{0}': expected one of C, V, S, F, L")]
    UnknownCategory(char),
}

/// The five sound classes a syllable template can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// `C`: general consonants.
    Consonant,
    /// `V`: vowels.
    Vowel,
    /// `S`: sibilants that lead onset clusters.
    Sibilant,
    /// `F`: consonants allowed in final position.
    Final,
    /// `L`: liquids and glides.
    Liquid,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Consonant,
        Category::Vowel,
        Category::Sibilant,
        Category::Final,
        Category::Liquid,
    ];

    /// Map a template tag to its category.
    pub fn from_tag(tag: char) -> Result<Category, PhonemeError> {
        match tag {
            'C' => Ok(Category::Consonant),
            'V' => Ok(Category::Vowel),
            'S' => Ok(Category::Sibilant),
            'F' => Ok(Category::Final),
            'L' => Ok(Category::Liquid),
            other => Err(PhonemeError::UnknownCategory(other)),
        }
    }

    pub fn tag(&self) -> char {
        match self {
            Category::Consonant => 'C',
            Category::Vowel => 'V',
            Category::Sibilant => 'S',
            Category::Final => 'F',
            Category::Liquid => 'L',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Symbols available to each category.
///
/// Symbols are single characters, usually IPA; the orthography decides how
/// they are finally written. Each category serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeInventory {
    #[serde(rename = "C", with = "symbol_string")]
    pub consonants: Vec<char>,
    #[serde(rename = "V", with = "symbol_string")]
    pub vowels: Vec<char>,
    #[serde(rename = "S", with = "symbol_string")]
    pub sibilants: Vec<char>,
    #[serde(rename = "F", with = "symbol_string")]
    pub finals: Vec<char>,
    #[serde(rename = "L", with = "symbol_string")]
    pub liquids: Vec<char>,
}

impl Default for PhonemeInventory {
    fn default() -> Self {
        Self {
            consonants: "ptkmnls".chars().collect(),
            vowels: "aeiou".chars().collect(),
            sibilants: "s".chars().collect(),
            finals: "mn".chars().collect(),
            liquids: "rl".chars().collect(),
        }
    }
}

impl PhonemeInventory {
    pub fn symbols(&self, category: Category) -> &[char] {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
            Category::Sibilant => &self.sibilants,
            Category::Final => &self.finals,
            Category::Liquid => &self.liquids,
        }
    }

    /// Replace a category's symbols.
    pub fn set(&mut self, category: Category, symbols: &str) {
        let slot = match category {
            Category::Consonant => &mut self.consonants,
            Category::Vowel => &mut self.vowels,
            Category::Sibilant => &mut self.sibilants,
            Category::Final => &mut self.finals,
            Category::Liquid => &mut self.liquids,
        };
        *slot = symbols.chars().collect();
    }

    /// Look up a category's symbols by template tag.
    pub fn by_tag(&self, tag: char) -> Result<&[char], PhonemeError> {
        Ok(self.symbols(Category::from_tag(tag)?))
    }
}

mod symbol_string {
    use super::*;

    pub fn serialize<S: Serializer>(symbols: &[char], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&symbols.iter().collect::<String>())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<char>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Ok(category));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            Category::from_tag('X'),
            Err(PhonemeError::UnknownCategory('X'))
        );
        assert_eq!(
            Category::from_tag('?'),
            Err(PhonemeError::UnknownCategory('?'))
        );
        assert!(PhonemeInventory::default().by_tag('c').is_err());
    }

    #[test]
    fn default_inventory() {
        let inv = PhonemeInventory::default();
        assert_eq!(inv.by_tag('C').unwrap(), &['p', 't', 'k', 'm', 'n', 'l', 's']);
        assert_eq!(inv.by_tag('V').unwrap().len(), 5);
        assert_eq!(inv.by_tag('S').unwrap(), &['s']);
        assert_eq!(inv.by_tag('F').unwrap(), &['m', 'n']);
        assert_eq!(inv.by_tag('L').unwrap(), &['r', 'l']);
    }

    #[test]
    fn set_replaces_symbols() {
        let mut inv = PhonemeInventory::default();
        inv.set(Category::Sibilant, "sʃf");
        assert_eq!(inv.symbols(Category::Sibilant), &['s', 'ʃ', 'f']);
    }

    #[test]
    fn ron_uses_plain_strings() {
        let inv = PhonemeInventory::default();
        let serialized = ron::to_string(&inv).unwrap();
        assert!(serialized.contains("C:\"ptkmnls\""), "{}", serialized);

        let parsed: PhonemeInventory =
            ron::from_str(r#"(C: "ptkʃ", V: "aiu", S: "s", F: "mnŋ", L: "rl")"#).unwrap();
        assert_eq!(parsed.consonants, vec!['p', 't', 'k', 'ʃ']);
        assert_eq!(parsed.finals, vec!['m', 'n', 'ŋ']);
    }
}
