// Utility functions for matching-service

use std::collections::HashSet;

/// Lowercased, trimmed set of the non-blank items.
pub fn normalized_set(items: &[String]) -> HashSet<String> {
    items
        .iter()
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Size of the case-insensitive intersection of two attribute lists.
pub fn common_item_count(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let left = normalized_set(a);
    let right = normalized_set(b);
    left.intersection(&right).count()
}

/// Number of distinct lowercase words two texts share.
pub fn common_word_count(a: &str, b: &str) -> usize {
    let left: HashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
    let right: HashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();
    left.intersection(&right).count()
}

/// Number of non-blank items in a list.
pub fn filled_count(items: &[String]) -> usize {
    items.iter().filter(|item| !item.trim().is_empty()).count()
}

pub fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}
