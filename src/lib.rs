//! Conlang Namegen: procedural names for invented languages.
//!
//! Builds pronounceable, language-consistent words and names from a phoneme
//! inventory, a syllable-shape template, phonotactic restrictions and an
//! orthography, while keeping every name a language hands out distinct.

pub mod core;
pub mod schema;
