//! I/O module for reading SpatiaLite geometry BLOBs

pub mod gaia;

pub use gaia::{read_geometry, GaiaReader, GaiaReaderConfiguration};
