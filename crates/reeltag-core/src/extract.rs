/// The Extractor — pulls a roll code off the front of a clip filename.
///
/// Cinema cameras stamp the card's roll code as the first four characters
/// of every clip name (`A001C001_200101B6.MXF` → `A001`). This module
/// judges only the filename stem; the media-extension gate is applied
/// separately by the scanner.
use crate::model::RollCode;

/// Extract the roll code from a clip filename.
///
/// The extension (everything after the final `.`) is stripped, then the
/// first four characters of the remaining stem must match `[A-Z][0-9]{3}`
/// literally — no case folding, so `b002…` does not match. Returns `None`
/// when the stem is shorter than four characters or the prefix does not
/// follow the convention; that is the normal outcome for non-clip files,
/// not an error.
///
/// Pure function: no I/O, deterministic for a given string.
pub fn extract(filename: &str) -> Option<RollCode> {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => filename,
    };
    let head: [u8; 4] = stem.as_bytes().get(..4)?.try_into().ok()?;
    RollCode::from_bytes(head)
}
