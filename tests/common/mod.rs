//! Shared test utilities for gaiageo integration tests.
//!
//! All test crates import this via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use gaiageo::{read_geometry, Geometry, SpatialGeometry};

/// Decode a blob that is expected to be a valid geometry.
pub fn decode_ok(blob: &[u8]) -> SpatialGeometry {
    match read_geometry(blob) {
        Ok(Some(geom)) => geom,
        Ok(None) => panic!("blob was not recognized as a geometry"),
        Err(e) => panic!("blob failed to decode: {}", e),
    }
}

/// Unwrap a collection's members or fail the test.
pub fn members(geom: &Geometry) -> &[Geometry] {
    match geom {
        Geometry::GeometryCollection(gc) => &gc.0,
        other => panic!("expected a GeometryCollection, got {:?}", other),
    }
}
