// src/lib.rs

pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;

pub use crate::core::config::StoreConfig;
pub use crate::core::feedback::{Action, Feedback, FeedbackType};
pub use crate::core::store::DictionaryStore;
pub use crate::error::{DictError, Result, Suggestions};
