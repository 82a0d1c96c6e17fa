//! Value types for decoded geometries

mod coordinate;
mod envelope;
mod geometry;

pub use coordinate::Coordinate;
pub use envelope::Envelope;
pub use geometry::{
    Geometry, GeometryCollection, GeometryKind, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, SpatialGeometry,
};
