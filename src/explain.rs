//! Turns audit numbers into human-readable rationale.
//!
//! The redundancy tiers (0.1, 0.3) and the relevance tip threshold (0.6)
//! here are the same boundaries the CLI uses for display, so any consumer
//! re-checking them sees identical cutoffs.

use crate::models::{CoverageResult, Explanation, Verdict};

/// Redundancy above this is called out as high.
const REDUNDANCY_HIGH: f64 = 0.3;
/// Redundancy above this (up to high) is noted but acceptable.
const REDUNDANCY_MODERATE: f64 = 0.1;
/// Below this average relevance, suggest refining the query.
const RELEVANCE_TIP_THRESHOLD: f64 = 0.6;

/// Builds the four-field explanation for an audit.
///
/// Tip ordering is fixed: query-specificity first, then the first missing
/// concept, then redundancy. When none apply, a single all-clear tip.
pub fn explain(
    score: f64,
    verdict: Verdict,
    relevance_scores: &[f64],
    coverage: &CoverageResult,
    redundancy_score: f64,
) -> Explanation {
    let summary = match verdict {
        Verdict::Safe => format!(
            "The retrieval is Safe ({:.1}/100). The chunks are highly relevant and cover required concepts.",
            score
        ),
        Verdict::Risky => format!(
            "The retrieval is Risky ({:.1}/100). It may lack key details or contain irrelevant info.",
            score
        ),
        Verdict::Insufficient => format!(
            "The retrieval is Insufficient ({:.1}/100). The chunks fundamentally fail to address the query.",
            score
        ),
    };

    let missing_concepts = if coverage.missing.is_empty() {
        "All key concepts from the query appear to be covered.".to_string()
    } else {
        format!(
            "The following key concepts are missing: {}.",
            coverage.missing.join(", ")
        )
    };

    let redundancy_note = if redundancy_score > REDUNDANCY_HIGH {
        "High redundancy detected. Multiple chunks contain near-identical information.".to_string()
    } else if redundancy_score > REDUNDANCY_MODERATE {
        "Some redundancy detected, but it is acceptable.".to_string()
    } else {
        "Information is diverse with minimal repetition.".to_string()
    };

    let mut tips: Vec<String> = Vec::new();
    let avg_relevance = if relevance_scores.is_empty() {
        0.0
    } else {
        relevance_scores.iter().sum::<f64>() / relevance_scores.len() as f64
    };
    if avg_relevance < RELEVANCE_TIP_THRESHOLD {
        tips.push("Try refining the query to be more specific.".to_string());
    }
    if let Some(first_missing) = coverage.missing.first() {
        tips.push(format!(
            "Ensure the corpus contains documents about '{}'.",
            first_missing
        ));
    }
    if redundancy_score > REDUNDANCY_HIGH {
        tips.push(
            "Reduce top_k or apply Maximal Marginal Relevance (MMR) reranking.".to_string(),
        );
    }
    if tips.is_empty() {
        tips.push("The retrieval looks good; no immediate actions needed.".to_string());
    }

    Explanation {
        summary,
        missing_concepts,
        redundancy_note,
        improvement_tip: tips.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_coverage() -> CoverageResult {
        CoverageResult {
            score: 1.0,
            missing: Vec::new(),
        }
    }

    #[test]
    fn test_summary_embeds_score_one_decimal() {
        let e = explain(82.456, Verdict::Safe, &[0.9], &full_coverage(), 0.0);
        assert!(e.summary.contains("82.5/100"));
        assert!(e.summary.contains("Safe"));
    }

    #[test]
    fn test_missing_concepts_joined() {
        let cov = CoverageResult {
            score: 0.5,
            missing: vec!["pricing".to_string(), "limits".to_string()],
        };
        let e = explain(40.0, Verdict::Insufficient, &[0.2], &cov, 0.0);
        assert!(e.missing_concepts.contains("pricing, limits"));
    }

    #[test]
    fn test_missing_concepts_all_covered() {
        let e = explain(90.0, Verdict::Safe, &[0.9], &full_coverage(), 0.0);
        assert!(e.missing_concepts.contains("appear to be covered"));
    }

    #[test]
    fn test_redundancy_tiers() {
        let high = explain(50.0, Verdict::Risky, &[0.9], &full_coverage(), 0.31);
        assert!(high.redundancy_note.contains("High redundancy"));

        let moderate = explain(50.0, Verdict::Risky, &[0.9], &full_coverage(), 0.2);
        assert!(moderate.redundancy_note.contains("acceptable"));

        // Exactly 0.3 is moderate, exactly 0.1 is minimal (strict bounds).
        let boundary_high = explain(50.0, Verdict::Risky, &[0.9], &full_coverage(), 0.3);
        assert!(boundary_high.redundancy_note.contains("acceptable"));

        let minimal = explain(50.0, Verdict::Risky, &[0.9], &full_coverage(), 0.1);
        assert!(minimal.redundancy_note.contains("diverse"));
    }

    #[test]
    fn test_tip_order_fixed() {
        let cov = CoverageResult {
            score: 0.0,
            missing: vec!["quotas".to_string()],
        };
        let e = explain(20.0, Verdict::Insufficient, &[0.1, 0.2], &cov, 0.5);
        let refine = e.improvement_tip.find("refining the query").unwrap();
        let ensure = e.improvement_tip.find("documents about 'quotas'").unwrap();
        let reduce = e.improvement_tip.find("Reduce top_k").unwrap();
        assert!(refine < ensure && ensure < reduce);
    }

    #[test]
    fn test_fallback_tip_when_nothing_applies() {
        let e = explain(95.0, Verdict::Safe, &[0.9, 0.8], &full_coverage(), 0.05);
        assert!(e.improvement_tip.contains("looks good"));
    }
}
