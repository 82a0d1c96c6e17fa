//! Geometry tree produced by the BLOB reader

use super::{Coordinate, Envelope};
use std::fmt;

/// Base shape of a geometry, independent of dimensions and compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}

/// A single position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Coordinate);

impl Point {
    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> Option<f64> {
        self.0.z
    }
}

/// An ordered sequence of coordinates (possibly empty)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString(pub Vec<Coordinate>);

impl LineString {
    pub fn coords(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First and last coordinates are equal. Not enforced by the reader.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

/// A shell ring plus zero or more hole rings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub exterior: LineString,
    pub interiors: Vec<LineString>,
}

impl Polygon {
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Polygon {
            exterior,
            interiors,
        }
    }

    /// Total number of rings, shell included
    pub fn ring_count(&self) -> usize {
        1 + self.interiors.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPoint(pub Vec<Point>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString(pub Vec<LineString>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// Heterogeneous, arbitrarily nested collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

/// A decoded geometry node
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Base shape of this node
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Visit every coordinate in storage order
    pub fn for_each_coordinate<F: FnMut(&Coordinate)>(&self, f: &mut F) {
        match self {
            Geometry::Point(p) => f(&p.0),
            Geometry::LineString(ls) => visit_coords(&ls.0, f),
            Geometry::Polygon(poly) => visit_polygon(poly, &mut *f),
            Geometry::MultiPoint(mp) => {
                for p in &mp.0 {
                    f(&p.0);
                }
            }
            Geometry::MultiLineString(mls) => {
                for ls in &mls.0 {
                    visit_coords(&ls.0, &mut *f);
                }
            }
            Geometry::MultiPolygon(mpoly) => {
                for poly in &mpoly.0 {
                    visit_polygon(poly, &mut *f);
                }
            }
            Geometry::GeometryCollection(gc) => {
                for g in &gc.0 {
                    g.for_each_coordinate(&mut *f);
                }
            }
        }
    }

    /// Number of coordinates in the whole subtree
    pub fn coordinate_count(&self) -> usize {
        let mut count = 0;
        self.for_each_coordinate(&mut |_| count += 1);
        count
    }

    /// Any coordinate in the subtree carries a Z value
    pub fn has_z(&self) -> bool {
        let mut found = false;
        self.for_each_coordinate(&mut |c| found |= c.has_z());
        found
    }

    /// Envelope computed from the decoded coordinates
    pub fn compute_envelope(&self) -> Option<Envelope> {
        let mut env: Option<Envelope> = None;
        self.for_each_coordinate(&mut |c| {
            env = Some(match env {
                Some(mut e) => {
                    e.expand_to_include(c);
                    e
                }
                None => Envelope::new(c.x, c.y, c.x, c.y),
            });
        });
        env
    }
}

fn visit_coords<F: FnMut(&Coordinate)>(coords: &[Coordinate], f: &mut F) {
    for c in coords {
        f(c);
    }
}

fn visit_polygon<F: FnMut(&Coordinate)>(poly: &Polygon, f: &mut F) {
    visit_coords(&poly.exterior.0, &mut *f);
    for ring in &poly.interiors {
        visit_coords(&ring.0, &mut *f);
    }
}

/// Root of a decoded BLOB: the geometry tree plus its SRID and stored MBR.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGeometry {
    pub geometry: Geometry,
    /// Spatial reference id; 0 means unset
    pub srid: i32,
    /// MBR as stored in the BLOB header
    pub envelope: Option<Envelope>,
}

impl SpatialGeometry {
    pub fn new(geometry: Geometry) -> Self {
        SpatialGeometry {
            geometry,
            srid: 0,
            envelope: None,
        }
    }

    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }
}
