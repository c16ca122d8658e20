//! The integrity auditor: orchestrates the scoring metrics into one
//! composite 0-100 score and a categorical verdict.
//!
//! The auditor holds only fixed weight constants, so a single instance can
//! be shared across concurrent audits. Every call returns a fresh
//! [`AuditResult`]; identical inputs yield bit-identical results.

use crate::explain;
use crate::metrics;
use crate::models::{AuditResult, CoverageResult, Verdict};
use crate::text;

/// Weighted scoring configuration. Relevance and coverage dominate; the
/// maximum achievable raw score is their sum (0.8), which the 125x scale
/// maps to exactly 100.
#[derive(Debug, Clone)]
pub struct IntegrityAuditor {
    w_relevance: f64,
    w_coverage: f64,
    w_redundancy: f64,
    w_gap_penalty: f64,
}

/// Coverage below this triggers the fixed gap penalty.
const COVERAGE_CLIFF: f64 = 0.5;
/// Maps the raw [0, 0.8] range onto [0, 100].
const SCORE_SCALE: f64 = 125.0;

impl Default for IntegrityAuditor {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrityAuditor {
    pub fn new() -> Self {
        Self {
            w_relevance: 0.4,
            w_coverage: 0.4,
            w_redundancy: 0.1,
            w_gap_penalty: 0.1,
        }
    }

    /// Audits a set of retrieved chunks against a query.
    ///
    /// An empty query or empty chunk list yields the degenerate
    /// `Insufficient` result with a zero score rather than an error.
    ///
    /// The composite formula: `avg_relevance * 0.4 + coverage * 0.4`, minus
    /// `redundancy * 0.1`, minus an extra fixed 0.1 when coverage falls
    /// below 0.5. The result is scaled by 125 and clamped to [0, 100]. The
    /// gap penalty stacks with the redundancy subtraction and can push the
    /// intermediate value negative; the clamp runs after the full
    /// computation.
    pub fn audit(&self, query: &str, chunks: &[String]) -> AuditResult {
        if query.is_empty() || chunks.is_empty() {
            return self.insufficient_input_result();
        }

        let relevance_scores = metrics::relevance_scores(query, chunks);
        let avg_relevance = if relevance_scores.is_empty() {
            0.0
        } else {
            relevance_scores.iter().sum::<f64>() / relevance_scores.len() as f64
        };

        let concepts = text::extract_key_concepts(query);
        let coverage = metrics::coverage(&concepts, chunks);
        let redundancy_score = metrics::redundancy(chunks);

        let raw_score = avg_relevance * self.w_relevance + coverage.score * self.w_coverage;
        let gap_penalty = if coverage.score < COVERAGE_CLIFF {
            self.w_gap_penalty
        } else {
            0.0
        };
        let final_score = raw_score - redundancy_score * self.w_redundancy - gap_penalty;
        let score = (final_score * SCORE_SCALE).clamp(0.0, 100.0);

        let verdict = Verdict::from_score(score);
        let explanation =
            explain::explain(score, verdict, &relevance_scores, &coverage, redundancy_score);

        AuditResult {
            score,
            verdict,
            relevance_scores,
            coverage_score: coverage.score,
            missing_concepts: coverage.missing,
            redundancy_score,
            explanation,
        }
    }

    /// Per-chunk near-duplicate flags for display, derived from the same
    /// Jaccard metric the redundancy score uses.
    pub fn duplicate_flags(&self, chunks: &[String]) -> Vec<bool> {
        metrics::duplicate_flags(chunks)
    }

    fn insufficient_input_result(&self) -> AuditResult {
        let coverage = CoverageResult {
            score: 0.0,
            missing: Vec::new(),
        };
        let explanation = explain::explain(0.0, Verdict::Insufficient, &[], &coverage, 0.0);
        AuditResult {
            score: 0.0,
            verdict: Verdict::Insufficient,
            relevance_scores: Vec::new(),
            coverage_score: 0.0,
            missing_concepts: Vec::new(),
            redundancy_score: 0.0,
            explanation,
        }
    }
}
