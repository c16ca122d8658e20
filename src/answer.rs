//! Grounded answer generation, gated on the integrity verdict.
//!
//! The "answer" is a curation of retrieved text, not a generated one: the
//! top-relevance chunks are concatenated verbatim. If the integrity score is
//! below the gate, no extractive work is performed at all.

use crate::models::GroundedAnswer;

/// Minimum 0-100 integrity score required before any answer is assembled.
/// Slightly lenient: decent-but-imperfect retrieval still answers.
pub const INTEGRITY_THRESHOLD: f64 = 60.0;

/// Chunks at or below this relevance are excluded as noise.
const RELEVANCE_FLOOR: f64 = 0.4;

/// At most this many chunks are stitched into the answer.
const MAX_ANSWER_CHUNKS: usize = 2;

const LOW_INTEGRITY_MESSAGE: &str = "Retrieval integrity is too low to generate a reliable \
grounded answer. Please improve your retrieval context.";

const NO_RELEVANT_CHUNKS_MESSAGE: &str =
    "No specific chunks were found to be highly relevant to the query.";

/// Builds an extractive answer from the top-relevance chunks.
///
/// Call order matters: `relevance_scores` and `integrity_score` are the
/// outputs of [`crate::auditor::IntegrityAuditor::audit`] for the same
/// query and chunks — they are reused here rather than recomputed.
///
/// The query itself is unused today (the answer is purely extractive); the
/// parameter is kept so the contract matches the audit entry point.
pub fn generate_grounded_answer(
    _query: &str,
    chunks: &[String],
    relevance_scores: &[f64],
    integrity_score: f64,
) -> GroundedAnswer {
    if integrity_score < INTEGRITY_THRESHOLD {
        return GroundedAnswer {
            answer: LOW_INTEGRITY_MESSAGE.to_string(),
            is_grounded: false,
            sources: Vec::new(),
        };
    }

    // Pair each chunk index with its score, keep only the relevant ones.
    let mut relevant: Vec<(usize, f64)> = chunks
        .iter()
        .zip(relevance_scores.iter())
        .enumerate()
        .filter(|(_, (_, score))| **score > RELEVANCE_FLOOR)
        .map(|(idx, (_, score))| (idx, *score))
        .collect();

    // Stable sort: ties keep ascending input order.
    relevant.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    relevant.truncate(MAX_ANSWER_CHUNKS);

    if relevant.is_empty() {
        return GroundedAnswer {
            answer: NO_RELEVANT_CHUNKS_MESSAGE.to_string(),
            is_grounded: false,
            sources: Vec::new(),
        };
    }

    let mut answer = String::new();
    let mut sources = Vec::with_capacity(relevant.len());
    for (idx, _) in &relevant {
        answer.push_str(&chunks[*idx]);
        answer.push_str("\n\n");
        sources.push(idx + 1); // 1-based for display
    }

    GroundedAnswer {
        answer: answer.trim_end().to_string(),
        is_grounded: true,
        sources,
    }
}
