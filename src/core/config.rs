// File: src/core/config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.json";

/// Only single-character typos are indexed unless configured otherwise.
/// Index size grows exponentially with this bound; keep it at 1 or 2.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 1;

/// Where a store lives and how far its fuzzy index reaches.
///
/// `max_edit_distance` bounds the deletes indexed per word. A value of 0
/// indexes each word only under itself, which turns fuzzy suggestions off.
/// The only miss that still suggests anything is a deleted word looked up
/// by its exact spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub max_edit_distance: usize,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// See the type docs for what a distance of 0 does.
    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}
