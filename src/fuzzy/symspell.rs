// File: src/fuzzy/symspell.rs
use crate::fuzzy::deletes::generate_deletes;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Fuzzy lookup index based on the Symmetric Delete (SymSpell) algorithm.
/// It pre-calculates the "deletes" of every dictionary word so that a miss
/// can be answered from the query's own deletes, independent of dictionary size.
///
/// The index is derived data. It only ever grows: removing a word from the
/// dictionary leaves its variants here, so a deleted word may still be suggested.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    /// Maps a delete variant (e.g., "ct") to the words it came from (e.g., {"cat"}).
    deletes: HashMap<String, HashSet<String>>,
    max_edit_distance: usize,
}

impl FuzzyIndex {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            deletes: HashMap::new(),
            max_edit_distance,
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Records `word` under each of its delete variants. Indexing the same
    /// word twice has no further effect.
    /// Complexity: Amortized O(k^2) for distance 1, where k is the word length.
    pub fn index_word(&mut self, word: &str) {
        for edit in generate_deletes(word, self.max_edit_distance) {
            let words = self.deletes.entry(edit).or_default();
            if !words.contains(word) {
                words.insert(word.to_string());
            }
        }
    }

    /// Words that produced `variant`, if any.
    pub fn words_for(&self, variant: &str) -> Option<&HashSet<String>> {
        self.deletes.get(variant)
    }

    /// Number of distinct delete variants held.
    pub fn variant_count(&self) -> usize {
        self.deletes.len()
    }

    /// Collects words close to `query`.
    ///
    /// First the query itself is treated as a variant, which finds words one
    /// insertion away. Then every delete of the query is checked both as a
    /// dictionary key (`is_key`) and as a variant, which finds words one
    /// deletion or substitution away. The result is sorted and deduplicated.
    pub fn suggest<F>(&self, query: &str, is_key: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut candidates = BTreeSet::new();

        if let Some(words) = self.deletes.get(query) {
            candidates.extend(words.iter().cloned());
        }

        for edit in generate_deletes(query, self.max_edit_distance) {
            if let Some(words) = self.deletes.get(&edit) {
                candidates.extend(words.iter().cloned());
            }
            if is_key(&edit) {
                candidates.insert(edit);
            }
        }

        candidates.into_iter().collect()
    }
}
