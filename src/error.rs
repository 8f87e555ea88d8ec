// File: src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Suggestions attached to a lookup miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// Sorted, deduplicated words within the edit-distance bound.
    Found(Vec<String>),
    /// Nothing in the dictionary is close enough.
    Empty,
}

impl Suggestions {
    pub fn from_words(words: Vec<String>) -> Self {
        if words.is_empty() {
            Suggestions::Empty
        } else {
            Suggestions::Found(words)
        }
    }

    pub fn words(&self) -> &[String] {
        match self {
            Suggestions::Found(words) => words,
            Suggestions::Empty => &[],
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words().iter().any(|w| w == word)
    }
}

#[derive(Error, Debug)]
pub enum DictError {
    /// The backing file is missing or unreadable.
    #[error("cannot read dictionary {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file is not a flat JSON object of strings.
    #[error("the dictionary {} is not in a standard json format: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("word must not be empty")]
    EmptyWord,

    #[error("word already exists: {0}")]
    AlreadyExists(String),

    #[error("word does not exist: {word}")]
    NotFound {
        word: String,
        suggestions: Suggestions,
    },

    /// Write-back failed; in-memory state is untouched.
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl DictError {
    /// True for errors raised while constructing a store.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DictError::Load { .. } | DictError::Malformed { .. })
    }
}

pub type Result<T> = std::result::Result<T, DictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_list_is_the_no_suggestion_signal() {
        assert_eq!(Suggestions::from_words(vec![]), Suggestions::Empty);
        assert!(Suggestions::Empty.words().is_empty());
    }

    #[test]
    fn only_construction_errors_are_fatal() {
        let load = DictError::Load {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(load.is_fatal());
        assert!(!DictError::AlreadyExists("cat".into()).is_fatal());
    }
}
