//! # gaiageo
//!
//! A pure Rust reader for SpatiaLite internal geometry BLOBs.
//!
//! SpatiaLite stores geometry columns in its own binary encoding: a fixed
//! header (SRID, MBR, type code) followed by a recursive payload of points,
//! lines, polygons and collections, optionally with delta-compressed
//! coordinates. This crate turns such a BLOB into a [`Geometry`] tree.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gaiageo::read_geometry;
//!
//! let blob: Vec<u8> = row.get("geometry")?;
//! if let Some(geom) = read_geometry(&blob)? {
//!     println!("{} with {} coordinates, srid {}",
//!         geom.kind(), geom.geometry.coordinate_count(), geom.srid);
//! }
//! # Ok::<(), gaiageo::GaiaError>(())
//! ```
//!
//! ## Error model
//!
//! - A buffer that is not a geometry BLOB at all (too short, wrong markers,
//!   unsupported type code) decodes to `Ok(None)`, with the reason recorded
//!   as a [`Notification`](notification::Notification) on the reader.
//! - A BLOB that looks like geometry but is corrupt returns a [`GaiaError`].
//!   No partial geometry is ever returned.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod notification;
pub mod types;

pub use error::{GaiaError, Result};
pub use io::gaia::{read_geometry, GaiaReader, GaiaReaderConfiguration};
pub use types::{
    Coordinate, Envelope, Geometry, GeometryCollection, GeometryKind, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, SpatialGeometry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
