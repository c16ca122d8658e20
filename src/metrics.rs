//! Set-overlap scoring metrics: similarity, relevance, coverage, redundancy.
//!
//! All functions are pure and total — malformed input degrades to a zero (or
//! vacuously full) score, never an error. Sub-scores are bounded to [0, 1].

use crate::models::CoverageResult;
use crate::text::tokenize;

/// Pairwise similarity above this flags a chunk as a near-duplicate of an
/// earlier one. Shared by [`duplicate_flags`] and any display-level check so
/// the numbers never diverge.
pub const DUPLICATE_THRESHOLD: f64 = 0.6;

/// Jaccard similarity between two texts: `|A ∩ B| / |A ∪ B|` over token
/// sets. Returns 0.0 when either side has no tokens.
pub fn jaccard(text_a: &str, text_b: &str) -> f64 {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count() as f64;
    let union = tokens_a.union(&tokens_b).count() as f64;
    intersection / union
}

/// Per-chunk relevance: the fraction of query tokens present in each chunk,
/// in input order. Deliberately not Jaccard — a chunk is not penalized for
/// containing extra, non-query vocabulary.
pub fn relevance_scores(query: &str, chunks: &[String]) -> Vec<f64> {
    let query_tokens = tokenize(query);

    chunks
        .iter()
        .map(|chunk| {
            if query_tokens.is_empty() {
                return 0.0;
            }
            let chunk_tokens = tokenize(chunk);
            let intersection = query_tokens.intersection(&chunk_tokens).count() as f64;
            intersection / query_tokens.len() as f64
        })
        .collect()
}

/// Checks presence of each concept across the combined chunk corpus.
///
/// Matching is case-insensitive substring containment so that multi-word
/// concepts ("retrieval integrity") match as phrases. No concepts means
/// vacuous full coverage.
pub fn coverage(concepts: &[String], chunks: &[String]) -> CoverageResult {
    if concepts.is_empty() {
        return CoverageResult {
            score: 1.0,
            missing: Vec::new(),
        };
    }

    let blob = chunks.join(" ").to_lowercase();
    let mut missing = Vec::new();
    let mut found_count = 0usize;

    for concept in concepts {
        if blob.contains(&concept.to_lowercase()) {
            found_count += 1;
        } else {
            missing.push(concept.clone());
        }
    }

    CoverageResult {
        score: found_count as f64 / concepts.len() as f64,
        missing,
    }
}

/// Mean pairwise Jaccard similarity across all unordered chunk pairs.
/// Fewer than two chunks means no pairs and a redundancy of 0.0.
pub fn redundancy(chunks: &[String]) -> f64 {
    if chunks.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut pair_count = 0usize;
    for i in 0..chunks.len() {
        for j in (i + 1)..chunks.len() {
            total += jaccard(&chunks[i], &chunks[j]);
            pair_count += 1;
        }
    }

    (total / pair_count as f64).clamp(0.0, 1.0)
}

/// Flags each chunk that is a near-duplicate (Jaccard > 0.6) of any earlier
/// chunk. The first occurrence is never flagged.
pub fn duplicate_flags(chunks: &[String]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let is_dup = chunks[..i]
            .iter()
            .any(|earlier| jaccard(chunk, earlier) > DUPLICATE_THRESHOLD);
        flags.push(is_dup);
    }
    flags
}
