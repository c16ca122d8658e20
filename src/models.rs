//! Core data models used throughout Rigor.
//!
//! These types are the read-only value objects that flow out of the audit
//! pipeline: every audit produces a fresh [`AuditResult`], and answer
//! generation produces a fresh [`GroundedAnswer`]. Nothing here is mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// Three-level categorical judgment derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Risky,
    Insufficient,
}

impl Verdict {
    /// Maps a 0-100 composite score to a verdict. Thresholds are inclusive
    /// lower bounds: exactly 80 is `Safe`, exactly 50 is `Risky`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Verdict::Safe
        } else if score >= 50.0 {
            Verdict::Risky
        } else {
            Verdict::Insufficient
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Safe => "Safe",
            Verdict::Risky => "Risky",
            Verdict::Insufficient => "Insufficient",
        };
        write!(f, "{}", s)
    }
}

/// Fraction of query concepts found anywhere in the chunk corpus, plus the
/// concepts that were not found (in extraction order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResult {
    pub score: f64,
    pub missing: Vec<String>,
}

/// Human-readable rationale for an audit, keyed by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// One-sentence verdict summary with the score to one decimal place.
    pub summary: String,
    /// Either an all-covered note or the comma-joined missing concepts.
    pub missing_concepts: String,
    /// Three-tier redundancy message (boundaries at 0.1 and 0.3).
    pub redundancy_note: String,
    /// Space-joined actionable tips, or a single all-clear tip.
    pub improvement_tip: String,
}

/// The complete output of one audit call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    /// Composite integrity score, clamped to [0, 100].
    pub score: f64,
    pub verdict: Verdict,
    /// Per-chunk relevance in input order, each in [0, 1].
    pub relevance_scores: Vec<f64>,
    /// Fraction of query concepts found across all chunks, in [0, 1].
    pub coverage_score: f64,
    /// Query concepts not found in any chunk, in extraction order.
    pub missing_concepts: Vec<String>,
    /// Mean pairwise chunk similarity, in [0, 1].
    pub redundancy_score: f64,
    pub explanation: Explanation,
}

/// An extractive answer gated on the integrity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedAnswer {
    /// Selected chunk texts joined by blank lines, or a refusal message.
    pub answer: String,
    /// True only when the answer is composed from retrieved text.
    pub is_grounded: bool,
    /// 1-based indices of the chunks used, in descending-relevance order.
    pub sources: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds_inclusive() {
        assert_eq!(Verdict::from_score(80.0), Verdict::Safe);
        assert_eq!(Verdict::from_score(100.0), Verdict::Safe);
        assert_eq!(Verdict::from_score(79.999), Verdict::Risky);
        assert_eq!(Verdict::from_score(50.0), Verdict::Risky);
        assert_eq!(Verdict::from_score(49.999), Verdict::Insufficient);
        assert_eq!(Verdict::from_score(0.0), Verdict::Insufficient);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Safe.to_string(), "Safe");
        assert_eq!(Verdict::Risky.to_string(), "Risky");
        assert_eq!(Verdict::Insufficient.to_string(), "Insufficient");
    }
}
