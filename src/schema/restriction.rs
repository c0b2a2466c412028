/// Phonotactic restrictions: patterns that veto a candidate syllable.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One dispreferred sound pattern, tested against the raw (unspelled) syllable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Restriction {
    /// The same symbol twice in a row, e.g. "tt" or "aa".
    Doubled,
    /// A symbol from `first` immediately followed by one from `second`.
    Cluster { first: String, second: String },
    /// A custom regular expression, matched anywhere in the syllable.
    Pattern(#[serde(with = "regex_string")] Regex),
}

impl Restriction {
    pub fn cluster(first: &str, second: &str) -> Self {
        Restriction::Cluster {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Ok(Restriction::Pattern(Regex::new(source)?))
    }

    /// Returns true if the syllable contains this pattern.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Restriction::Doubled => {
                let symbols: Vec<char> = raw.chars().collect();
                symbols.windows(2).any(|pair| pair[0] == pair[1])
            }
            Restriction::Cluster { first, second } => {
                let symbols: Vec<char> = raw.chars().collect();
                symbols
                    .windows(2)
                    .any(|pair| first.contains(pair[0]) && second.contains(pair[1]))
            }
            Restriction::Pattern(regex) => regex.is_match(raw),
        }
    }
}

/// A named, ordered list of restrictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestrictionSet {
    pub name: String,
    pub restrictions: Vec<Restriction>,
}

/// Returns the first restriction that vetoes the syllable, if any.
pub fn first_violation<'a>(restrictions: &'a [Restriction], raw: &str) -> Option<&'a Restriction> {
    restrictions.iter().find(|r| r.matches(raw))
}

mod regex_string {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(regex.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Regex, D::Error> {
        let source = String::deserialize(deserializer)?;
        Regex::new(&source).map_err(serde::de::Error::custom)
    }
}
