/// Reeltag Core — roll-code extraction and card scanning.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI,
/// automation scripts) that handle the platform-specific pieces —
/// volume enumeration, the actual rename, eject.
///
/// # Modules
///
/// - [`model`] — Roll codes, the recognized media-extension set, scan results.
/// - [`extract`] — Filename-convention matcher that pulls a roll code out of a clip name.
/// - [`scanner`] — Single-pass directory walk that tallies roll codes across a card.
pub mod extract;
pub mod model;
pub mod scanner;

pub use extract::extract;
pub use model::{MediaExtension, RollCode};
pub use scanner::{scan, RollCount, ScanError, ScanResult};
