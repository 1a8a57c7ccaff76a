/// The Aggregator — walks a mounted card and tallies roll codes.
///
/// Single-threaded, synchronous walk: camera cards hold at most a few
/// thousand clips, and only filenames are inspected (no file is ever
/// opened for content), so the cost is one directory enumeration. Each
/// [`scan`] call is independent and idempotent for an unchanged card.
use crate::extract::extract;
use crate::model::{MediaExtension, RollCode};

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Hard failure from [`scan`]: the supplied path cannot be used as a
/// scan root.
///
/// Missing path, non-directory, and unreadable directory all surface
/// through the single `DirectoryNotAccessible` variant. An accessible
/// directory that simply contains no media files is a valid empty
/// [`ScanResult`], never this error.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not accessible: {path}")]
    DirectoryNotAccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One ranked candidate: a roll code and how many clip files carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollCount {
    pub code: RollCode,
    pub count: u64,
}

/// Result of one card scan. Fully owned by the caller; [`scan`] builds a
/// fresh one per invocation and keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    /// Candidate roll codes, highest count first. On equal counts the
    /// code whose first file appeared earlier in traversal order ranks
    /// higher.
    pub candidates: Vec<RollCount>,
    /// Files whose extension matched the recognized media set.
    pub matched_files: u64,
    /// All regular files visited during the walk.
    pub total_files: u64,
    /// Non-fatal walk errors (e.g. an unreadable subdirectory). The scan
    /// continues past these; they never alter the tally.
    pub errors: Vec<String>,
}

impl ScanResult {
    /// The top-ranked candidate, if any — the name the card should get.
    pub fn top_candidate(&self) -> Option<RollCode> {
        self.candidates.first().map(|c| c.code)
    }
}

/// Per-code tally while the walk is in flight.
struct Tally {
    /// Position among distinct codes at first sighting; tie-break key.
    first_seen: u64,
    count: u64,
}

/// Scan a mounted card root and tally the roll codes of its clips.
///
/// The walk is recursive: cameras commonly nest clips under folders such
/// as `DCIM/`, `CLIP/`, or `PRIVATE/`. Traversal is sorted by file name
/// so first-seen tie-breaking is deterministic across platforms and
/// repeated scans of the same card.
///
/// Fails with [`ScanError::DirectoryNotAccessible`] when `path` does not
/// exist, is not a directory, or cannot be read.
pub fn scan(path: impl AsRef<Path>) -> Result<ScanResult, ScanError> {
    let path = path.as_ref();

    // One readability probe up front. This covers missing paths,
    // non-directories, and permission failures in a single check and
    // keeps "empty card" distinguishable from "inaccessible card".
    if let Err(source) = fs::read_dir(path) {
        return Err(ScanError::DirectoryNotAccessible {
            path: path.to_path_buf(),
            source,
        });
    }

    info!("Scanning {}", path.display());

    let mut tallies: HashMap<RollCode, Tally> = HashMap::new();
    let mut matched_files = 0u64;
    let mut total_files = 0u64;
    let mut errors: Vec<String> = Vec::new();

    let walker = WalkDir::new(path).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error walking {}: {e}", path.display());
                errors.push(e.to_string());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        total_files += 1;

        let Some(name) = entry.file_name().to_str() else {
            // Non-UTF-8 names can never follow the ASCII clip convention.
            continue;
        };

        if MediaExtension::of_filename(name).is_none() {
            continue;
        }
        matched_files += 1;

        let Some(code) = extract(name) else {
            debug!("Media file without a roll-code prefix: {name}");
            continue;
        };

        let next_index = tallies.len() as u64;
        tallies
            .entry(code)
            .or_insert(Tally {
                first_seen: next_index,
                count: 0,
            })
            .count += 1;
    }

    // Rank: count descending, then first-seen ascending.
    let mut ranked: Vec<(u64, RollCount)> = tallies
        .into_iter()
        .map(|(code, tally)| {
            (
                tally.first_seen,
                RollCount {
                    code,
                    count: tally.count,
                },
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(&b.0)));
    let candidates: Vec<RollCount> = ranked.into_iter().map(|(_, c)| c).collect();

    info!(
        "Scan complete: {} files, {} media files, {} candidate codes, {} errors",
        total_files,
        matched_files,
        candidates.len(),
        errors.len()
    );

    Ok(ScanResult {
        candidates,
        matched_files,
        total_files,
        errors,
    })
}
