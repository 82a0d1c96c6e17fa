//! Structural checks run before any value is decoded.

use std::fmt;

use super::constants::{layout, markers};

/// Why a buffer was not recognized as a geometry BLOB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotRecognized {
    TooShort(usize),
    StartMarker(u8),
    EndMarker(u8),
    MbrMarker(u8),
}

impl fmt::Display for NotRecognized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotRecognized::TooShort(len) => write!(
                f,
                "blob of {} bytes is shorter than the {} byte minimum",
                len,
                layout::MIN_BLOB_SIZE
            ),
            NotRecognized::StartMarker(b) => write!(f, "start marker mismatch: {:#04X}", b),
            NotRecognized::EndMarker(b) => write!(f, "end marker mismatch: {:#04X}", b),
            NotRecognized::MbrMarker(b) => write!(f, "MBR marker mismatch: {:#04X}", b),
        }
    }
}

/// Check length and the start, end and MBR markers.
pub fn validate(blob: &[u8]) -> Result<(), NotRecognized> {
    if blob.len() < layout::MIN_BLOB_SIZE {
        return Err(NotRecognized::TooShort(blob.len()));
    }
    let start = blob[layout::START_MARKER];
    if start != markers::START {
        return Err(NotRecognized::StartMarker(start));
    }
    let end = blob[blob.len() - 1];
    if end != markers::END {
        return Err(NotRecognized::EndMarker(end));
    }
    let mbr = blob[layout::MBR_MARKER];
    if mbr != markers::MBR {
        return Err(NotRecognized::MbrMarker(mbr));
    }
    Ok(())
}

/// Boolean form of [`validate`].
pub fn is_geometry_blob(blob: &[u8]) -> bool {
    validate(blob).is_ok()
}
