// File: src/core/mod.rs
pub mod config;
pub mod feedback;
pub mod store;
