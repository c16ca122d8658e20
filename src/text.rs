//! Tokenization, key-concept extraction, and input normalization.
//!
//! Everything here is deterministic and dictionary-free: tokenization is a
//! lowercase split on word boundaries, and concept extraction combines a
//! capitalized-phrase pass (a cheap approximation of named entities) with a
//! salient-word pass filtered through a fixed stop-word list.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English function words excluded from the salient-word heuristic.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "has", "have", "had", "it", "this", "that", "these",
    "those", "what", "which", "who", "when", "where", "why", "how", "can", "could", "should",
    "would",
];

/// Salient words must be longer than this many characters.
const MIN_SALIENT_LEN: usize = 4;

/// Maximal runs of consecutive capitalized words, e.g. "Retrieval Integrity".
fn capitalized_phrase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z][a-zA-Z]*(?:\s+[A-Z][a-zA-Z]*)*\b").unwrap())
}

/// Splits text into a set of lowercase word tokens (alphanumeric runs).
/// Empty or whitespace-only text yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts key concepts from a query: capitalized phrases first, then
/// salient words. Duplicates collapse; first-occurrence order is kept so
/// that "missing concepts" reporting stays stable.
pub fn extract_key_concepts(query: &str) -> Vec<String> {
    let mut concepts: Vec<String> = Vec::new();

    for m in capitalized_phrase_re().find_iter(query) {
        let phrase = m.as_str();
        // Single-character matches ("A", "I") are noise, not entities.
        if phrase.chars().count() > 1 {
            let lower = phrase.to_lowercase();
            if !concepts.contains(&lower) {
                concepts.push(lower);
            }
        }
    }

    for word in query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
    {
        if word.chars().count() > MIN_SALIENT_LEN && !STOP_WORDS.contains(&word) {
            if !concepts.iter().any(|c| c.as_str() == word) {
                concepts.push(word.to_string());
            }
        }
    }

    concepts
}

/// Centralized input normalization: trims the query, trims each chunk, and
/// drops empty or whitespace-only chunks while preserving order.
pub fn normalize_inputs(query: &str, chunks: &[String]) -> (String, Vec<String>) {
    let clean_query = query.trim().to_string();
    let clean_chunks = chunks
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    (clean_query, clean_chunks)
}
