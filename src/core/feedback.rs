// File: src/core/feedback.rs
//! The status + message shape handed to whatever front end drives the store.
//! Every call here returns a [`Feedback`]; nothing propagates an error.

use crate::core::store::DictionaryStore;
use crate::error::{DictError, Suggestions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub status: FeedbackType,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: FeedbackType::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: FeedbackType::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FeedbackType::Success
    }
}

/// Mutations accepted by [`DictionaryStore::modify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Add,
    Del,
}

impl FromStr for Action {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Action::Add),
            "DEL" => Ok(Action::Del),
            _ => Err(DictError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => f.write_str("ADD"),
            Action::Del => f.write_str("DEL"),
        }
    }
}

const MISS_HEADER: &str = "Word does not exist in the dictionary, \
please check the spell or add a meaning for the word!\n\n\
------------- Suggestions -------------\n";

fn miss_message(suggestions: &Suggestions) -> String {
    let mut message = String::from(MISS_HEADER);
    match suggestions {
        Suggestions::Found(words) => message.push_str(&words.join(", ")),
        Suggestions::Empty => message.push_str("No suggestion found!"),
    }
    message
}

impl DictionaryStore {
    /// `search` wrapped for the front end: the definition on success, the
    /// miss text with its suggestion block otherwise.
    pub fn search_feedback(&self, word: &str) -> Feedback {
        match self.search(word) {
            Ok(definition) => Feedback::success(definition),
            Err(DictError::NotFound { suggestions, .. }) => {
                Feedback::error(miss_message(&suggestions))
            }
            Err(e) => Feedback::error(e.to_string()),
        }
    }

    /// Single entry point for every mutating request.
    pub fn modify(&self, word: &str, info: &str, action: Action) -> Feedback {
        let outcome = match action {
            Action::Add => self.add(word, info).map(|()| "Meaning added successfully"),
            Action::Del => self.delete(word).map(|()| "Delete successfully"),
        };

        match outcome {
            Ok(message) => Feedback::success(message),
            Err(DictError::AlreadyExists(_)) => Feedback::error("Word already exist"),
            Err(DictError::NotFound { .. }) => Feedback::error("word does not exist"),
            Err(e) => Feedback::error(e.to_string()),
        }
    }

    /// `write_back` wrapped for the front end; failures carry the I/O message.
    pub fn write_back_feedback(&self) -> Feedback {
        if self.path().is_none() {
            return Feedback::success("==== no backing file, nothing to write ====");
        }
        match self.write_back() {
            Ok(()) => Feedback::success("==== Write back successfully ===="),
            Err(e) => Feedback::error(e.to_string()),
        }
    }
}
