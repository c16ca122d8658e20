//! Markdown audit report renderer.
//!
//! Pure function from an [`AuditResult`] and the audited query to a
//! markdown document. The CLI writes it to disk on `--report`; the renderer
//! itself does no I/O.

use chrono::Local;

use crate::models::AuditResult;

/// Redundancy above this is called out in the findings section. Matches the
/// moderate tier boundary used by the explanation generator.
const REDUNDANCY_NOTE_THRESHOLD: f64 = 0.1;

/// Renders the full audit report as markdown.
pub fn render_report(result: &AuditResult, query: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut out = String::new();

    out.push_str("# Retrieval Integrity Audit Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", timestamp));

    out.push_str("## User Query\n\n");
    out.push_str(&format!("> {}\n\n", query));

    out.push_str("## Executive Summary\n\n");
    out.push_str(&format!(
        "| Integrity Score | {:.1} / 100 |\n|---|---|\n| Assessment | {} |\n\n",
        result.score, result.verdict
    ));

    out.push_str("## Audit Findings\n\n");
    if result.missing_concepts.is_empty() {
        out.push_str("- Missing concepts: none detected.\n");
    } else {
        out.push_str(&format!(
            "- Missing concepts: {}\n",
            result.missing_concepts.join(", ")
        ));
    }
    if result.redundancy_score > REDUNDANCY_NOTE_THRESHOLD {
        out.push_str(&format!(
            "- Redundancy level: detected (score: {:.2})\n",
            result.redundancy_score
        ));
    } else {
        out.push_str("- Redundancy level: minimal\n");
    }
    out.push('\n');

    out.push_str("## Recommendations\n\n");
    out.push_str(&result.explanation.improvement_tip);
    out.push_str("\n\n");

    out.push_str("## Audit Summary\n\n");
    out.push_str(&result.explanation.summary);
    out.push('\n');

    out
}
