//! reeltag — derive a camera card's roll code from its clip filenames.
//!
//! Thin binary entry point. All logic lives in the `reeltag-core` crate;
//! this binary scans a directory and prints the ranked candidates so an
//! operator (or a wrapping script) can rename the card to the suggested
//! name. Volume enumeration, the rename itself, and eject are left to
//! the platform tooling around this command.

use clap::Parser;
use std::path::PathBuf;

/// Scan a mounted camera card and suggest its roll-code name.
#[derive(Parser)]
#[command(name = "reeltag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive a camera card's roll code from its clip filenames")]
struct Cli {
    /// Root of the mounted card (e.g. /Volumes/Untitled or E:\)
    path: PathBuf,

    /// Output the full scan result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Logs go to stderr so `--json`
    // output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = reeltag_core::scan(&cli.path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("files scanned: {}", result.total_files);
    println!("media files:   {}", result.matched_files);
    for error in &result.errors {
        eprintln!("warning: {error}");
    }

    if result.candidates.is_empty() {
        println!("no roll codes found");
        return Ok(());
    }

    println!("roll codes:");
    for candidate in &result.candidates {
        println!("{}", candidate_line(candidate));
    }
    if let Some(code) = result.top_candidate() {
        println!("suggested card name: {code}");
    }

    Ok(())
}

/// One listing line per candidate, e.g. `  A001  (207 clips)`.
fn candidate_line(candidate: &reeltag_core::RollCount) -> String {
    let noun = if candidate.count == 1 { "clip" } else { "clips" };
    format!("  {}  ({} {noun})", candidate.code, candidate.count)
}
