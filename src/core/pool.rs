/// Morpheme and word pools: keyed vocabularies that reuse earlier entries
/// more often as they fill, and never hand the same form to two keys.

use rand::Rng;
use std::fmt;
use thiserror::Error;

use crate::core::random::range_int;
use crate::core::syllable::SyllableError;
use crate::schema::language::Language;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("syllable error: {0}")]
    Syllable(#[from] SyllableError),
    #[error("no new {pool} for key '{key}' after {attempts} attempts")]
    Exhausted {
        pool: PoolKind,
        key: String,
        attempts: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Morpheme,
    Word,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Morpheme => f.write_str("morpheme"),
            PoolKind::Word => f.write_str("word"),
        }
    }
}

/// How many fresh-entry slots a pool draw adds on top of its stored entries.
///
/// A draw over `stored + extras` reuses an entry whenever it lands on a
/// stored one, so reuse grows as the key's pool grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtrasPolicy {
    /// Extras for the generic (empty) key.
    pub generic: usize,
    /// Extras for any named key.
    pub keyed: usize,
}

impl ExtrasPolicy {
    pub fn for_key(&self, key: &str) -> usize {
        if key.is_empty() {
            self.generic
        } else {
            self.keyed
        }
    }
}

pub const MORPHEME_EXTRAS: ExtrasPolicy = ExtrasPolicy {
    generic: 10,
    keyed: 1,
};

pub const WORD_EXTRAS: ExtrasPolicy = ExtrasPolicy {
    generic: 3,
    keyed: 2,
};

impl Language {
    /// Fetch a morpheme for `key`, reusing a stored one or minting a new one.
    ///
    /// With morpheme pooling bypassed every call returns a fresh syllable.
    pub fn get_morpheme<R: Rng + ?Sized>(&mut self, key: &str, rng: &mut R) -> Result<String, PoolError> {
        if self.profile.bypass_morpheme_pool {
            return Ok(self.make_syllable(rng)?);
        }

        let extras = MORPHEME_EXTRAS.for_key(key);
        let mut attempts = 0u32;
        loop {
            if self.profile.gave_up(attempts) {
                return Err(PoolError::Exhausted {
                    pool: PoolKind::Morpheme,
                    key: key.to_string(),
                    attempts,
                });
            }
            attempts += 1;

            let stored = self.morphemes.get(key);
            let n = range_int(0, stored.len() + extras, rng);
            if let Some(existing) = stored.get(n) {
                return Ok(existing.clone());
            }

            let morpheme = self.make_syllable(rng)?;
            if self.morphemes.insert(key, morpheme.clone()) {
                return Ok(morpheme);
            }
        }
    }

    /// Assemble a fresh word of `min_syllables..=max_syllables` morphemes.
    ///
    /// Exactly one position carries `key`; the others draw from the generic
    /// morpheme pool.
    pub fn make_word<R: Rng + ?Sized>(&mut self, key: &str, rng: &mut R) -> Result<String, PoolError> {
        let count = range_int(
            self.profile.min_syllables,
            self.profile.max_syllables + 1,
            rng,
        )
        .max(1);
        let keyed_position = range_int(0, count, rng);

        let mut word = String::new();
        for position in 0..count {
            let slot_key = if position == keyed_position { key } else { "" };
            word.push_str(&self.get_morpheme(slot_key, rng)?);
        }
        Ok(word)
    }

    /// Fetch a word for `key`, reusing a stored one or assembling a new one.
    pub fn get_word<R: Rng + ?Sized>(&mut self, key: &str, rng: &mut R) -> Result<String, PoolError> {
        let extras = WORD_EXTRAS.for_key(key);
        let mut attempts = 0u32;
        loop {
            if self.profile.gave_up(attempts) {
                return Err(PoolError::Exhausted {
                    pool: PoolKind::Word,
                    key: key.to_string(),
                    attempts,
                });
            }
            attempts += 1;

            let stored = self.words.get(key);
            let n = range_int(0, stored.len() + extras, rng);
            if let Some(existing) = stored.get(n) {
                return Ok(existing.clone());
            }

            let word = self.make_word(key, rng)?;
            if self.words.insert(key, word.clone()) {
                return Ok(word);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::language::LanguageProfile;
    use crate::schema::structure::Structure;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pooled_language() -> Language {
        let mut profile = LanguageProfile::default();
        profile.bypass_morpheme_pool = false;
        profile.bypass_word_pool = false;
        Language::new(profile)
    }

    #[test]
    fn extras_policy() {
        assert_eq!(MORPHEME_EXTRAS.for_key(""), 10);
        assert_eq!(MORPHEME_EXTRAS.for_key("of"), 1);
        assert_eq!(WORD_EXTRAS.for_key(""), 3);
        assert_eq!(WORD_EXTRAS.for_key("river"), 2);
    }

    #[test]
    fn bypass_never_pools() {
        let mut lang = Language::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            lang.get_morpheme("of", &mut rng).unwrap();
        }
        assert!(lang.morphemes().is_empty());
    }

    #[test]
    fn first_keyed_morpheme_is_stored() {
        let mut lang = pooled_language();
        let mut rng = StdRng::seed_from_u64(1);
        let m = lang.get_morpheme("of", &mut rng).unwrap();
        assert_eq!(lang.morphemes().get("of"), &[m]);
    }

    #[test]
    fn morphemes_never_shared_between_keys() {
        let mut lang = pooled_language();
        let mut rng = StdRng::seed_from_u64(77);
        let keys = ["", "of", "the", "river", "hill"];
        for i in 0..300 {
            lang.get_morpheme(keys[i % keys.len()], &mut rng).unwrap();
        }

        let mut seen = HashSet::new();
        for (_, entries) in lang.morphemes().iter() {
            for entry in entries {
                assert!(seen.insert(entry.clone()), "{} stored twice", entry);
            }
        }
        assert_eq!(seen.len(), lang.morphemes().len());
    }

    #[test]
    fn keyed_pool_reuses_about_half_the_time() {
        let trials = 2_000;
        let mut reused = 0;
        for seed in 0..trials {
            let mut lang = pooled_language();
            let mut rng = StdRng::seed_from_u64(seed);
            let first = lang.get_morpheme("of", &mut rng).unwrap();
            let second = lang.get_morpheme("of", &mut rng).unwrap();
            if first == second {
                reused += 1;
            }
        }
        // one stored entry, one extra slot: reuse probability 1/2
        let ratio = reused as f64 / trials as f64;
        assert!((0.44..0.56).contains(&ratio), "ratio was {}", ratio);
    }

    #[test]
    fn words_carry_syllable_bounds() {
        let mut lang = pooled_language();
        lang.profile.structure = Structure::parse("CV").unwrap();
        lang.profile.min_syllables = 2;
        lang.profile.max_syllables = 3;
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let w = lang.make_word("", &mut rng).unwrap();
            let len = w.chars().count();
            assert!(len == 4 || len == 6, "{} has {} symbols", w, len);
        }
    }

    #[test]
    fn word_key_lands_in_exactly_one_syllable() {
        let mut lang = pooled_language();
        lang.profile.min_syllables = 3;
        lang.profile.max_syllables = 3;
        let mut rng = StdRng::seed_from_u64(8);
        let word = lang.make_word("river", &mut rng).unwrap();
        let river = lang.morphemes().get("river");
        assert_eq!(river.len(), 1);
        assert!(word.contains(river[0].as_str()));
    }

    #[test]
    fn words_unique_across_keys() {
        let mut lang = pooled_language();
        lang.profile.min_syllables = 1;
        lang.profile.max_syllables = 3;
        let mut rng = StdRng::seed_from_u64(21);
        for i in 0..200 {
            let key = if i % 3 == 0 { "city" } else { "" };
            lang.get_word(key, &mut rng).unwrap();
        }
        let mut seen = HashSet::new();
        for (_, entries) in lang.words().iter() {
            for entry in entries {
                assert!(seen.insert(entry.clone()));
            }
        }
    }

    #[test]
    fn exhausted_pool_reports_key() {
        let mut lang = pooled_language();
        lang.profile.phonemes.consonants = vec!['t'];
        lang.profile.phonemes.vowels = vec!['a'];
        lang.profile.max_attempts = 200;
        let mut rng = StdRng::seed_from_u64(3);
        lang.get_morpheme("of", &mut rng).unwrap();
        // "tat" is taken by "of"; "the" can never get a fresh morpheme
        let err = lang.get_morpheme("the", &mut rng).unwrap_err();
        assert!(matches!(
            err,
            PoolError::Exhausted {
                pool: PoolKind::Morpheme,
                ref key,
                attempts: 200,
            } if key == "the"
        ));
    }
}
