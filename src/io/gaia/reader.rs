//! Geometry BLOB reader, the entry point for decoding.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gaiageo::io::gaia::GaiaReader;
//!
//! let mut reader = GaiaReader::new();
//! match reader.decode(&blob)? {
//!     Some(geom) => println!("{} srid={}", geom.kind(), geom.srid),
//!     None => println!("not a geometry: {:?}", reader.notifications()),
//! }
//! ```

use std::io::Read;

use rayon::prelude::*;

use crate::error::Result;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Envelope, SpatialGeometry};

use super::byte_reader::ByteReader;
use super::constants::layout;
use super::coordinate_reader::CoordinateLayout;
use super::geometry_builder::GeometryBuilder;
use super::geometry_type::GeometryTypeInfo;
use super::validator;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration options for the BLOB reader.
#[derive(Debug, Clone)]
pub struct GaiaReaderConfiguration {
    /// Maximum nesting depth of geometry collections. A collection member
    /// nested deeper than this aborts the decode with
    /// [`GaiaError::NestingTooDeep`](crate::error::GaiaError::NestingTooDeep).
    ///
    /// Default: `None` (unbounded).
    pub max_nesting_depth: Option<usize>,

    /// When `true`, the MBR stored in the header is attached to the decoded
    /// root as its envelope.
    ///
    /// Default: `true`.
    pub attach_envelope: bool,
}

impl Default for GaiaReaderConfiguration {
    fn default() -> Self {
        Self {
            max_nesting_depth: None,
            attach_envelope: true,
        }
    }
}

// ---------------------------------------------------------------------------
// GaiaReader
// ---------------------------------------------------------------------------

/// Decodes SpatiaLite internal geometry BLOBs.
///
/// The read pipeline for one BLOB is:
///
/// 1. Structural validation (length, start/end/MBR markers).
/// 2. Endian marker → byte reader.
/// 3. SRID and stored MBR.
/// 4. Type code → classification → coordinate layout.
/// 5. Recursive geometry build over the payload.
/// 6. SRID and envelope attached to the root.
///
/// Steps 1 and an unknown type code in step 4 produce `Ok(None)` plus a
/// notification; everything else that goes wrong is a [`GaiaError`].
///
/// [`GaiaError`]: crate::error::GaiaError
#[derive(Debug, Default)]
pub struct GaiaReader {
    config: GaiaReaderConfiguration,
    notifications: NotificationCollection,
}

impl GaiaReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: GaiaReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn configuration(&self) -> &GaiaReaderConfiguration {
        &self.config
    }

    /// Notifications recorded by the most recent `decode`, `decode_reader`
    /// or `decode_all` call. Each call starts from an empty collection.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Decode one BLOB.
    pub fn decode(&mut self, blob: &[u8]) -> Result<Option<SpatialGeometry>> {
        self.notifications.clear();
        decode_blob(blob, &self.config, &mut self.notifications)
    }

    /// Buffer a byte source into memory and decode it.
    pub fn decode_reader<R: Read>(&mut self, mut source: R) -> Result<Option<SpatialGeometry>> {
        let mut blob = Vec::new();
        source.read_to_end(&mut blob)?;
        self.decode(&blob)
    }

    /// Decode many independent BLOBs in parallel.
    ///
    /// Results and notifications keep the input order.
    pub fn decode_all<B>(&mut self, blobs: &[B]) -> Vec<Result<Option<SpatialGeometry>>>
    where
        B: AsRef<[u8]> + Sync,
    {
        let config = &self.config;
        let decoded: Vec<_> = blobs
            .par_iter()
            .map(|blob| {
                let mut notes = NotificationCollection::new();
                let result = decode_blob(blob.as_ref(), config, &mut notes);
                (result, notes)
            })
            .collect();

        self.notifications.clear();
        let mut results = Vec::with_capacity(decoded.len());
        for (result, notes) in decoded {
            self.notifications.extend(notes);
            results.push(result);
        }
        results
    }
}

/// Decode one BLOB with the default configuration.
///
/// Returns `Ok(None)` when the buffer is not a recognized geometry BLOB.
pub fn read_geometry(blob: &[u8]) -> Result<Option<SpatialGeometry>> {
    GaiaReader::new().decode(blob)
}

fn decode_blob(
    blob: &[u8],
    config: &GaiaReaderConfiguration,
    notifications: &mut NotificationCollection,
) -> Result<Option<SpatialGeometry>> {
    if let Err(reason) = validator::validate(blob) {
        notifications.notify(NotificationType::NotRecognized, reason.to_string());
        return Ok(None);
    }

    // The end marker is not part of the payload
    let body = &blob[..blob.len() - 1];
    let mut reader = ByteReader::new(body, blob[layout::ENDIAN_MARKER])?;

    reader.set_position(layout::SRID);
    let srid = reader.read_i32()?;

    reader.set_position(layout::MBR);
    let envelope = Envelope::new(
        reader.read_f64()?,
        reader.read_f64()?,
        reader.read_f64()?,
        reader.read_f64()?,
    );

    reader.set_position(layout::GEOMETRY_TYPE);
    let code = reader.read_i32()?;
    let Some(info) = GeometryTypeInfo::classify(code) else {
        notifications.notify(
            NotificationType::NotSupported,
            format!("unsupported geometry type code {}", code),
        );
        return Ok(None);
    };

    let builder = GeometryBuilder::with_max_depth(config.max_nesting_depth);
    let geometry = builder.build(&mut reader, &info, CoordinateLayout::for_type(&info))?;

    let trailing = reader.remaining();
    if trailing > 0 {
        notifications.notify(
            NotificationType::Warning,
            format!("{} unread bytes after {} payload", trailing, info.kind),
        );
    }

    let mut result = SpatialGeometry::new(geometry);
    result.srid = srid;
    if config.attach_envelope {
        result.envelope = Some(envelope);
    }
    Ok(Some(result))
}
