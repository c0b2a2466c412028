pub mod factory;
pub mod generator;
pub mod name;
pub mod pool;
pub mod presets;
pub mod random;
pub mod syllable;
