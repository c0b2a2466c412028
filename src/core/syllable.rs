/// Syllable synthesis: fill a structural template with phonemes, veto
/// forbidden clusters, then spell the result.

use rand::Rng;
use thiserror::Error;

use crate::core::random::choose_skewed;
use crate::schema::language::Language;
use crate::schema::orthography::{spell, DEFAULT_ORTHOGRAPHY};
use crate::schema::phonemes::Category;
use crate::schema::restriction::first_violation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyllableError {
    #[error("phoneme category {0} has no symbols")]
    EmptyCategory(Category),
    #[error("no syllable passed the restrictions after {0} attempts")]
    Exhausted(u32),
}

impl Language {
    /// Spell a raw syllable with this language's orthography.
    ///
    /// Layers are consulted consonant map first, then vowel map, then the
    /// built-in default. With orthography bypassed the input comes back as is.
    pub fn spell(&self, raw: &str) -> String {
        if self.profile.bypass_orthography {
            return raw.to_string();
        }
        spell(
            raw,
            &[
                &self.profile.consonant_orthography,
                &self.profile.vowel_orthography,
                &DEFAULT_ORTHOGRAPHY,
            ],
        )
    }

    /// Draw one unspelled syllable that passes every restriction.
    pub fn make_raw_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, SyllableError> {
        let profile = &self.profile;
        let mut attempts = 0u32;

        loop {
            if profile.gave_up(attempts) {
                return Err(SyllableError::Exhausted(attempts));
            }
            attempts += 1;

            let mut syllable = String::new();
            for slot in profile.structure.slots() {
                if slot.optional && !rng.gen_bool(0.5) {
                    continue;
                }
                let symbols = profile.phonemes.symbols(slot.category);
                let symbol = choose_skewed(symbols, profile.exponent, rng)
                    .map_err(|_| SyllableError::EmptyCategory(slot.category))?;
                syllable.push(*symbol);
            }

            if first_violation(&profile.restrictions, &syllable).is_none() {
                return Ok(syllable);
            }
        }
    }

    /// Draw one syllable and spell it.
    pub fn make_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, SyllableError> {
        let raw = self.make_raw_syllable(rng)?;
        Ok(self.spell(&raw))
    }
}
