// File: src/core/store.rs
use crate::core::config::StoreConfig;
use crate::error::{DictError, Result, Suggestions};
use crate::fuzzy::FuzzyIndex;
use crate::persistence::{load_from_disk, save_to_disk};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The authoritative word -> definition map and the fuzzy index derived from it.
/// Both always change under the same write guard.
struct StoreState {
    entries: HashMap<String, String>,
    index: FuzzyIndex,
}

/// A persistent dictionary with typo-tolerant lookup.
///
/// One store-wide lock serialises `add`, `delete` and `write_back`; `search`
/// takes the shared side of the same lock so it always sees a fully applied
/// mutation. Nothing is persisted until `write_back` is called.
///
/// The store is `Send + Sync`; share it with `Arc<DictionaryStore>`.
pub struct DictionaryStore {
    state: RwLock<StoreState>,
    dictionary_path: Option<PathBuf>,
}

impl DictionaryStore {
    /// Loads the dictionary at `config.path` and builds its fuzzy index.
    /// Fails if the file is missing or is not a flat JSON object of strings.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let entries = load_from_disk(config.path())?;
        let store = Self::build(entries, config.max_edit_distance, Some(config.path.clone()));
        store.log_loaded();
        Ok(store)
    }

    /// Like [`open`](Self::open), but a missing file gives an empty store
    /// bound to the same path. A malformed file is still an error.
    pub fn open_or_empty(config: &StoreConfig) -> Result<Self> {
        match Self::open(config) {
            Err(DictError::Load { source, .. }) if source.kind() == ErrorKind::NotFound => {
                info!(path = %config.path.display(), "dictionary file not found, starting empty");
                Ok(Self::build(
                    HashMap::new(),
                    config.max_edit_distance,
                    Some(config.path.clone()),
                ))
            }
            other => other,
        }
    }

    /// An empty store with no backing file; `write_back` does nothing.
    pub fn in_memory(max_edit_distance: usize) -> Self {
        Self::build(HashMap::new(), max_edit_distance, None)
    }

    /// A store without a backing file, pre-filled with `entries`.
    pub fn from_entries<I, K, V>(entries: I, max_edit_distance: usize) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, definition)| (word.into(), definition.into()))
            .collect();
        Self::build(entries, max_edit_distance, None)
    }

    fn build(
        entries: HashMap<String, String>,
        max_edit_distance: usize,
        dictionary_path: Option<PathBuf>,
    ) -> Self {
        let mut index = FuzzyIndex::new(max_edit_distance);
        for word in entries.keys() {
            index.index_word(word);
        }
        Self {
            state: RwLock::new(StoreState { entries, index }),
            dictionary_path,
        }
    }

    fn log_loaded(&self) {
        let state = self.state.read();
        info!(
            path = ?self.dictionary_path,
            entries = state.entries.len(),
            variants = state.index.variant_count(),
            max_edit_distance = state.index.max_edit_distance(),
            "dictionary loaded"
        );
    }

    /// Returns the definition of `word`, or a `NotFound` error carrying the
    /// words within the configured edit distance.
    pub fn search(&self, word: &str) -> Result<String> {
        let state = self.state.read();

        if let Some(definition) = state.entries.get(word) {
            return Ok(definition.clone());
        }

        let found = state
            .index
            .suggest(word, |candidate| state.entries.contains_key(candidate));
        debug!(word, suggestions = found.len(), "search miss");

        Err(DictError::NotFound {
            word: word.to_string(),
            suggestions: Suggestions::from_words(found),
        })
    }

    /// Inserts a new word. Existing definitions are never overwritten.
    pub fn add(&self, word: &str, definition: &str) -> Result<()> {
        if word.is_empty() {
            return Err(DictError::EmptyWord);
        }

        let mut state = self.state.write();
        if state.entries.contains_key(word) {
            return Err(DictError::AlreadyExists(word.to_string()));
        }

        state.entries.insert(word.to_string(), definition.to_string());
        state.index.index_word(word);
        debug!(word, "word added");
        Ok(())
    }

    /// Removes a word from the dictionary. Its fuzzy-index variants are kept,
    /// so it can still come back as a suggestion.
    pub fn delete(&self, word: &str) -> Result<()> {
        let mut state = self.state.write();
        if state.entries.remove(word).is_none() {
            return Err(DictError::NotFound {
                word: word.to_string(),
                suggestions: Suggestions::Empty,
            });
        }

        debug!(word, "word deleted");
        Ok(())
    }

    /// Persists the current entries to the backing file.
    /// A store without a backing file has nothing to write and succeeds.
    pub fn write_back(&self) -> Result<()> {
        // Exclusive so no add/delete can interleave with the write.
        let state = self.state.write();

        let Some(path) = &self.dictionary_path else {
            debug!("no backing file, nothing to write");
            return Ok(());
        };

        match save_to_disk(&state.entries, path) {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    entries = state.entries.len(),
                    "dictionary written back"
                );
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "write back failed");
                Err(e)
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.dictionary_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.state.read().entries.contains_key(word)
    }

    /// Number of distinct delete variants in the fuzzy index.
    pub fn variant_count(&self) -> usize {
        self.state.read().index.variant_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_store() -> DictionaryStore {
        DictionaryStore::from_entries([("cat", "a feline")], 1)
    }

    fn suggestions_for(store: &DictionaryStore, word: &str) -> Suggestions {
        match store.search(word) {
            Err(DictError::NotFound { suggestions, .. }) => suggestions,
            other => panic!("expected a miss for {word}, got {other:?}"),
        }
    }

    #[test]
    fn exact_hit_returns_definition() {
        assert_eq!(cat_store().search("cat").unwrap(), "a feline");
    }

    #[test]
    fn near_misses_suggest_the_stored_word() {
        let store = cat_store();
        for typo in ["ca", "cta", "cats", "bat"] {
            assert!(suggestions_for(&store, typo).contains("cat"), "{typo}");
        }
    }

    #[test]
    fn far_miss_has_no_suggestions() {
        assert_eq!(suggestions_for(&cat_store(), "elephant"), Suggestions::Empty);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(cat_store().search("Cat").is_err());
    }

    #[test]
    fn added_word_is_searchable_and_indexed() {
        let store = cat_store();
        store.add("cta", "a misspelling test").unwrap();

        assert_eq!(store.search("cta").unwrap(), "a misspelling test");
        assert!(suggestions_for(&store, "ct").contains("cta"));
    }

    #[test]
    fn duplicate_add_keeps_original() {
        let store = cat_store();
        let err = store.add("cat", "duplicate").unwrap_err();

        assert!(matches!(err, DictError::AlreadyExists(ref w) if w == "cat"));
        assert_eq!(store.search("cat").unwrap(), "a feline");
    }

    #[test]
    fn empty_word_is_rejected() {
        let store = cat_store();
        assert!(matches!(store.add("", "nothing"), Err(DictError::EmptyWord)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleted_word_is_missing_but_still_suggested() {
        let store = cat_store();
        let before = store.variant_count();
        store.delete("cat").unwrap();

        assert!(!store.contains("cat"));
        assert!(suggestions_for(&store, "cat").contains("cat"));
        assert_eq!(store.variant_count(), before);
    }

    #[test]
    fn deleting_absent_word_fails() {
        let store = cat_store();
        assert!(matches!(store.delete("dog"), Err(DictError::NotFound { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn in_memory_write_back_is_a_no_op() {
        let store = DictionaryStore::in_memory(1);
        store.add("cat", "a feline").unwrap();
        assert!(store.write_back().is_ok());
        assert!(store.path().is_none());
    }

    #[test]
    fn zero_distance_disables_suggestions() {
        let store = DictionaryStore::from_entries([("cat", "a feline")], 0);
        assert_eq!(store.search("cat").unwrap(), "a feline");
        for typo in ["ca", "cta", "cats", "bat"] {
            assert_eq!(suggestions_for(&store, typo), Suggestions::Empty, "{typo}");
        }
    }

    #[test]
    fn wider_distance_reaches_two_edits() {
        let store = DictionaryStore::from_entries([("house", "a building")], 2);
        assert!(suggestions_for(&store, "hse").contains("house"));

        let narrow = DictionaryStore::from_entries([("house", "a building")], 1);
        assert!(!suggestions_for(&narrow, "hse").contains("house"));
    }
}
