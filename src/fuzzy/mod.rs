// File: src/fuzzy/mod.rs
pub mod deletes;
pub mod symspell;

pub use deletes::generate_deletes;
pub use symspell::FuzzyIndex;
