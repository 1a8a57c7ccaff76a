/// Recognized camera media container extensions.
///
/// The set is fixed at compile time: these are the raw/footage formats
/// the major cinema cameras record (ARRI `.mxf`/`.ari`, RED `.r3d`,
/// Blackmagic `.braw`, plus QuickTime and MP4 wrappers).
use std::fmt;

/// A recognized media file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaExtension {
    Mxf,
    Mov,
    Mp4,
    R3d,
    Ari,
    Braw,
}

impl MediaExtension {
    pub const ALL: &'static [MediaExtension] = &[
        MediaExtension::Mxf,
        MediaExtension::Mov,
        MediaExtension::Mp4,
        MediaExtension::R3d,
        MediaExtension::Ari,
        MediaExtension::Braw,
    ];

    /// Canonical lowercase form, without the leading dot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mxf => "mxf",
            Self::Mov => "mov",
            Self::Mp4 => "mp4",
            Self::R3d => "r3d",
            Self::Ari => "ari",
            Self::Braw => "braw",
        }
    }

    /// Case-insensitive lookup from a bare extension (no leading dot),
    /// so `.mxf` and `.MXF` both match.
    ///
    /// Zero-heap-allocation hot path: the extension is lowercased into a
    /// fixed-size stack buffer rather than allocating a `String`. Nothing
    /// longer than 4 bytes can be a recognized extension.
    pub fn from_ext(ext: &str) -> Option<Self> {
        let bytes = ext.as_bytes();
        if bytes.len() > 4 {
            return None;
        }

        let mut lower = [0u8; 4];
        for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
            *dest = src.to_ascii_lowercase();
        }

        match &lower[..bytes.len()] {
            b"mxf" => Some(Self::Mxf),
            b"mov" => Some(Self::Mov),
            b"mp4" => Some(Self::Mp4),
            b"r3d" => Some(Self::R3d),
            b"ari" => Some(Self::Ari),
            b"braw" => Some(Self::Braw),
            _ => None,
        }
    }

    /// Lookup from a full filename, using the substring after the final `.`.
    ///
    /// A leading-dot name like `.mxf` has no stem and therefore no
    /// extension; it is not a media file.
    pub fn of_filename(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Self::from_ext(ext)
    }
}

impl fmt::Display for MediaExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
