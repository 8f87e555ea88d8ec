// File: src/fuzzy/deletes.rs
use std::collections::HashSet;

/// Generates every string reachable from `word` by deleting between one and
/// `max_distance` characters.
///
/// A distance of 0, or a word of at most one character, yields `{word}`.
/// Otherwise the word itself is not part of the result.
/// Expansion is breadth-first; each level is a set, so a variant reached
/// through several deletion orders is only expanded once.
/// Complexity: O(k^d) variants for a word of k characters.
pub fn generate_deletes(word: &str, max_distance: usize) -> HashSet<String> {
    let mut edits = HashSet::new();

    if max_distance == 0 || word.chars().count() <= 1 {
        edits.insert(word.to_string());
        return edits;
    }

    let mut current_edits = HashSet::from([word.to_string()]);

    for _ in 0..max_distance {
        let mut next_edits = HashSet::new();
        for edit in &current_edits {
            // Length-1 variants are already in the result and expand to themselves.
            if edit.chars().nth(1).is_none() {
                continue;
            }
            for (i, _) in edit.char_indices() {
                let mut deleted_variant = edit.clone();
                deleted_variant.remove(i);
                next_edits.insert(deleted_variant);
            }
        }
        if next_edits.is_empty() {
            break;
        }
        edits.extend(next_edits.iter().cloned());
        current_edits = next_edits;
    }

    edits
}
