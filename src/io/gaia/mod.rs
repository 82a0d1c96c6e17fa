//! SpatiaLite internal geometry BLOB support.
//!
//! # Module Structure
//!
//! - [`constants`]: Marker bytes, header offsets, type codes
//! - [`byte_reader`]: Endian-aware, bounds-checked primitive reads
//! - [`geometry_type`]: Type code classification
//! - [`coordinate_reader`]: The eight coordinate layouts
//! - [`validator`]: Structural checks
//! - [`geometry_builder`]: Recursive geometry reconstruction
//! - [`reader`]: `GaiaReader` entry point

pub mod byte_reader;
pub mod constants;
pub mod coordinate_reader;
pub mod geometry_builder;
pub mod geometry_type;
pub mod reader;
pub mod validator;

pub use byte_reader::ByteReader;
pub use coordinate_reader::CoordinateLayout;
pub use geometry_builder::GeometryBuilder;
pub use geometry_type::{GeometryTypeInfo, TypeFlags};
pub use reader::{read_geometry, GaiaReader, GaiaReaderConfiguration};
pub use validator::{is_geometry_blob, validate, NotRecognized};

pub use crate::types::GeometryKind;
