//! Error types for the gaiageo library

use std::io;
use thiserror::Error;

use crate::types::GeometryKind;

/// Fatal errors raised while decoding a geometry BLOB.
///
/// A blob that is merely not recognized as a geometry (too short, wrong
/// start/end/MBR marker, unknown top-level type) is not an error; the reader
/// returns `Ok(None)` for it instead.
#[derive(Debug, Error)]
pub enum GaiaError {
    /// IO error occurred while buffering the input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Endian marker at byte 1 is neither little nor big endian
    #[error("Unknown endian marker: {0:#04X}")]
    UnknownEndianMarker(u8),

    /// A primitive read would run past the end of the buffer
    #[error("Buffer underrun at offset {offset}: needed {needed} bytes, {available} available")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A collection member is not preceded by the entity marker
    #[error("Invalid entity marker at offset {offset}: found {found:#04X}")]
    EntityMarkerMismatch { offset: usize, found: u8 },

    /// A multi-geometry member carries the wrong base shape or coordinate layout
    #[error("Member type mismatch: expected {expected}, found type code {found}")]
    MemberTypeMismatch { expected: GeometryKind, found: i32 },

    /// A collection member carries a type code outside the known table
    #[error("Unknown member geometry type code: {0}")]
    UnknownMemberType(i32),

    /// A declared element count is negative, or a polygon has no rings
    #[error("Invalid count {count} at offset {offset}")]
    InvalidCount { offset: usize, count: i32 },

    /// Collection nesting exceeded the configured limit
    #[error("Geometry nesting exceeds the limit of {0}")]
    NestingTooDeep(usize),
}

/// Result type alias for gaiageo operations
pub type Result<T> = std::result::Result<T, GaiaError>;
