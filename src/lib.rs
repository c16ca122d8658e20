//! # Rigor
//!
//! Retrieval integrity auditing for RAG pipelines.
//!
//! Rigor scores the quality of retrieved text chunks against a user query
//! *before* an answer is generated: per-chunk relevance, concept coverage,
//! and cross-chunk redundancy combine into one bounded 0-100 score with a
//! three-level verdict (Safe / Risky / Insufficient), which in turn gates
//! whether an extractive grounded answer may be produced at all.
//!
//! The engine is deterministic and dependency-free at its core: no
//! embeddings, no external APIs, no persisted state. Every audit is a pure
//! function of (query, chunks).
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────────────┐   ┌─────────────┐
//! │ query+chunks │──▶│ relevance / coverage /       │──▶│ score +     │
//! │ (normalized) │   │ redundancy metrics           │   │ verdict     │
//! └──────────────┘   └─────────────────────────────┘   └──────┬──────┘
//!                                                             │
//!                                          ┌──────────────────┤
//!                                          ▼                  ▼
//!                                    ┌───────────┐     ┌────────────┐
//!                                    │explanation│     │  grounded  │
//!                                    │  + report │     │   answer   │
//!                                    └───────────┘     └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! rigor audit --demo                          # built-in demo scenario
//! rigor audit "pricing tiers?" --chunks ctx.txt
//! rigor audit "refund policy?" --file handbook.pdf --report audit.md
//! rigor serve                                 # start the HTTP API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core result value objects |
//! | [`text`] | Tokenization, concept extraction, normalization |
//! | [`metrics`] | Jaccard, relevance, coverage, redundancy |
//! | [`auditor`] | Composite scoring and verdicts |
//! | [`explain`] | Human-readable rationale |
//! | [`answer`] | Verdict-gated extractive answers |
//! | [`extract`] | File text extraction (txt/md/pdf) |
//! | [`chunk`] | Paragraph chunking for documents |
//! | [`report`] | Markdown audit reports |
//! | [`server`] | HTTP audit API |

pub mod answer;
pub mod audit_cmd;
pub mod auditor;
pub mod chunk;
pub mod config;
pub mod explain;
pub mod extract;
pub mod metrics;
pub mod models;
pub mod report;
pub mod server;
pub mod text;
