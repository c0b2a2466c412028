pub mod language;
pub mod orthography;
pub mod phonemes;
pub mod pool;
pub mod restriction;
pub mod structure;
