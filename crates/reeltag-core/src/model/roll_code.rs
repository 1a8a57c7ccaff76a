/// Roll/reel code — the 4-character identifier a camera assigns to a
/// recording card and stamps onto the front of every clip name.
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A validated roll code: one uppercase ASCII letter followed by three
/// ASCII digits, e.g. `A001`.
///
/// Stored inline as 4 bytes — `Copy`, no heap allocation, and cheap to
/// use as a `HashMap` key while tallying thousands of clips.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollCode([u8; 4]);

impl RollCode {
    /// Build a roll code from 4 raw bytes, returning `None` unless they
    /// match `[A-Z][0-9]{3}` exactly.
    ///
    /// No case folding: a lowercase letter byte is rejected here. Codes
    /// are compared as the camera wrote them.
    pub fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        if bytes[0].is_ascii_uppercase() && bytes[1..].iter().all(u8::is_ascii_digit) {
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// The code as a string slice, e.g. `"A001"`.
    pub fn as_str(&self) -> &str {
        // Construction guarantees the bytes are ASCII.
        std::str::from_utf8(&self.0).expect("roll code bytes are always ASCII")
    }
}

impl fmt::Display for RollCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RollCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RollCode({})", self.as_str())
    }
}

impl Serialize for RollCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error from parsing a string that is not a valid roll code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a roll code (expected one uppercase letter + three digits): {0:?}")]
pub struct ParseRollCodeError(pub String);

impl FromStr for RollCode {
    type Err = ParseRollCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ParseRollCodeError(s.to_string()))?;
        Self::from_bytes(bytes).ok_or_else(|| ParseRollCodeError(s.to_string()))
    }
}
