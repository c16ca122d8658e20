//! # Rigor CLI (`rigor`)
//!
//! The `rigor` binary audits retrieved RAG context from the command line
//! and serves the same engine over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! rigor --config ./config/rigor.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rigor audit "<query>" --chunks <file>` | Audit blank-line-separated chunks from a file |
//! | `rigor audit "<query>" --file <doc>` | Extract and auto-chunk a document (txt/md/pdf) |
//! | `rigor audit --demo` | Run the built-in demo scenario |
//! | `rigor audit ... --json` | Emit the full audit as JSON |
//! | `rigor serve` | Start the HTTP audit server |
//!
//! ## Examples
//!
//! ```bash
//! # Audit retrieved chunks against a query
//! rigor audit "What are the pricing tiers?" --chunks retrieved.txt
//!
//! # Audit a whole document, writing a markdown report
//! rigor audit "What is the refund policy?" --file handbook.pdf --report audit.md
//!
//! # The canned demo: duplicated and irrelevant chunks included
//! rigor audit --demo
//!
//! # Serve POST /audit and GET /health
//! rigor serve --config ./config/rigor.toml
//! ```

mod answer;
mod audit_cmd;
mod auditor;
mod chunk;
mod config;
mod explain;
mod extract;
mod metrics;
mod models;
mod report;
mod server;
mod text;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rigor CLI — retrieval integrity auditing for RAG pipelines.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file; when the file does not exist, built-in defaults are used.
#[derive(Parser)]
#[command(
    name = "rigor",
    about = "Rigor — audit the quality of retrieved RAG context before generation",
    version,
    long_about = "Rigor scores retrieved text chunks against a user query: per-chunk relevance, \
    concept coverage, and cross-chunk redundancy combine into a 0-100 integrity score with a \
    Safe/Risky/Insufficient verdict that gates extractive answer generation."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/rigor.toml`. Falls back to built-in defaults
    /// when the file does not exist.
    #[arg(long, global = true, default_value = "./config/rigor.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Audit retrieved chunks against a query.
    ///
    /// Prints the verdict, score, explanation, per-chunk relevance with
    /// near-duplicate flags, and the integrity-gated grounded answer.
    Audit {
        /// The user query the chunks were retrieved for.
        /// Optional only with --demo.
        query: Option<String>,

        /// File containing retrieved chunks, separated by blank lines.
        #[arg(long)]
        chunks: Option<PathBuf>,

        /// Whole document to extract and auto-chunk (txt, md, or pdf).
        /// Mutually exclusive with --chunks.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Run the built-in demo scenario (overrides query and context).
        #[arg(long)]
        demo: bool,

        /// Emit the full audit as pretty-printed JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Write a markdown audit report to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Start the HTTP audit server.
    ///
    /// Binds to the address configured in `[server].bind` and serves
    /// `POST /audit` and `GET /health`.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config_or_default(&cli.config)?;

    match cli.command {
        Commands::Audit {
            query,
            chunks,
            file,
            demo,
            json,
            report,
        } => {
            audit_cmd::run_audit(&cfg, query, chunks, file, demo, json, report)?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
