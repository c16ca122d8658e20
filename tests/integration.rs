use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn rigor_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("rigor");
    path
}

fn run_rigor(args: &[&str]) -> (String, String, bool) {
    let binary = rigor_binary();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run rigor binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_demo_audit_runs_end_to_end() {
    let (stdout, stderr, success) = run_rigor(&["audit", "--demo"]);
    assert!(success, "demo audit failed: stdout={}, stderr={}", stdout, stderr);

    // Three relevant chunks, one duplicate, one irrelevant: Risky band.
    assert!(stdout.contains("Audit verdict: Risky"), "stdout: {}", stdout);
    assert!(stdout.contains("Chunk analysis (5 chunks):"));
    // Chunk 4 repeats chunk 1's first sentence verbatim.
    assert!(stdout.contains("(near-duplicate)"));
    // Demo scores below the 60.0 answer gate.
    assert!(stdout.contains("Grounded answer withheld"));
}

#[test]
fn test_audit_json_output() {
    let (stdout, stderr, success) = run_rigor(&["audit", "--demo", "--json"]);
    assert!(success, "stdout={}, stderr={}", stdout, stderr);

    let value: serde_json::Value =
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON: {}\n{}", e, stdout));
    assert_eq!(value["audit"]["verdict"], "Risky");
    assert_eq!(value["answer"]["is_grounded"], false);
    // Chunk 4 repeats chunk 1's first sentence verbatim.
    assert_eq!(value["duplicate_flags"][3], true);
    assert_eq!(value["audit"]["relevance_scores"].as_array().unwrap().len(), 5);
}

#[test]
fn test_audit_with_chunks_file() {
    let tmp = TempDir::new().unwrap();
    let chunks_path = tmp.path().join("retrieved.txt");
    fs::write(
        &chunks_path,
        "The pricing tiers are Free, Pro, and Enterprise.\n\nRate limits are enforced per API key.",
    )
    .unwrap();

    let (stdout, stderr, success) = run_rigor(&[
        "audit",
        "What are the pricing tiers and rate limits?",
        "--chunks",
        chunks_path.to_str().unwrap(),
    ]);
    assert!(success, "audit failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Audit verdict:"));
    assert!(stdout.contains("Chunk analysis (2 chunks):"));
}

#[test]
fn test_audit_with_document_file() {
    let tmp = TempDir::new().unwrap();
    let doc_path = tmp.path().join("handbook.md");
    fs::write(
        &doc_path,
        "# Pricing\n\nThe pricing tiers are Free, Pro, and Enterprise.\n\nRate limits apply per key.",
    )
    .unwrap();

    let (stdout, _, success) = run_rigor(&[
        "audit",
        "What are the pricing tiers?",
        "--file",
        doc_path.to_str().unwrap(),
    ]);
    assert!(success, "stdout: {}", stdout);
    assert!(stdout.contains("Audit verdict:"));
}

#[test]
fn test_audit_requires_query_without_demo() {
    let (_, stderr, success) = run_rigor(&["audit"]);
    assert!(!success);
    assert!(stderr.contains("query is required"), "stderr: {}", stderr);
}

#[test]
fn test_audit_rejects_both_chunk_sources() {
    let (_, stderr, success) = run_rigor(&[
        "audit",
        "query",
        "--chunks",
        "a.txt",
        "--file",
        "b.pdf",
    ]);
    assert!(!success);
    assert!(stderr.contains("not both"), "stderr: {}", stderr);
}

#[test]
fn test_audit_rejects_empty_chunks_file() {
    let tmp = TempDir::new().unwrap();
    let chunks_path = tmp.path().join("empty.txt");
    fs::write(&chunks_path, "   \n\n   \n\n").unwrap();

    let (_, stderr, success) = run_rigor(&[
        "audit",
        "a valid query",
        "--chunks",
        chunks_path.to_str().unwrap(),
    ]);
    assert!(!success);
    assert!(stderr.contains("no usable chunks"), "stderr: {}", stderr);
}

#[test]
fn test_audit_rejects_unsupported_document() {
    let tmp = TempDir::new().unwrap();
    let doc_path = tmp.path().join("slides.pptx");
    fs::write(&doc_path, b"binary junk").unwrap();

    let (_, stderr, success) = run_rigor(&[
        "audit",
        "query",
        "--file",
        doc_path.to_str().unwrap(),
    ]);
    assert!(!success);
    assert!(stderr.contains("unsupported"), "stderr: {}", stderr);
}

#[test]
fn test_audit_writes_markdown_report() {
    let tmp = TempDir::new().unwrap();
    let report_path = tmp.path().join("audit.md");

    let (stdout, stderr, success) = run_rigor(&[
        "audit",
        "--demo",
        "--report",
        report_path.to_str().unwrap(),
    ]);
    assert!(success, "stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Report written to"));

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("# Retrieval Integrity Audit Report"));
    assert!(report.contains("Risky"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("rigor.toml");
    fs::write(&config_path, "[chunking]\nmax_chars = 0\n").unwrap();

    let (_, stderr, success) = run_rigor(&[
        "--config",
        config_path.to_str().unwrap(),
        "audit",
        "--demo",
    ]);
    assert!(!success);
    assert!(stderr.contains("max_chars"), "stderr: {}", stderr);
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let (stdout, stderr, success) = run_rigor(&[
        "--config",
        "/nonexistent/rigor.toml",
        "audit",
        "--demo",
    ]);
    assert!(success, "stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Audit verdict:"));
}
