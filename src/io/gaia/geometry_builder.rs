//! Recursive reconstruction of the geometry tree from the BLOB payload.
//!
//! Dispatch is on the base shape of a classified type code. Multi-geometry
//! members are each introduced by the entity marker and their own type
//! code, which must agree with the outer geometry in both base shape and
//! coordinate layout; any mismatch there aborts the whole decode.

use crate::error::{GaiaError, Result};
use crate::types::{
    Geometry, GeometryCollection, GeometryKind, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

use super::byte_reader::ByteReader;
use super::constants::markers;
use super::coordinate_reader::{read_point_doubles, CoordinateLayout};
use super::geometry_type::GeometryTypeInfo;

/// entity marker + type code + count
const MIN_MEMBER_SIZE: usize = 9;
/// entity marker + type code + X + Y
const MIN_POINT_MEMBER_SIZE: usize = 21;

/// Builds one geometry node, recursing into collection members.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryBuilder {
    max_depth: Option<usize>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how deeply geometry collections may nest.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Decode the node described by `info` at the reader's position.
    pub fn build(
        &self,
        reader: &mut ByteReader<'_>,
        info: &GeometryTypeInfo,
        layout: CoordinateLayout,
    ) -> Result<Geometry> {
        self.build_node(reader, info, layout, 0)
    }

    fn build_node(
        &self,
        reader: &mut ByteReader<'_>,
        info: &GeometryTypeInfo,
        layout: CoordinateLayout,
        depth: usize,
    ) -> Result<Geometry> {
        let geometry = match info.kind {
            GeometryKind::Point => Geometry::Point(self.read_point(reader, layout)?),
            GeometryKind::LineString => {
                Geometry::LineString(self.read_line_string(reader, layout)?)
            }
            GeometryKind::Polygon => Geometry::Polygon(self.read_polygon(reader, layout)?),
            GeometryKind::MultiPoint => {
                Geometry::MultiPoint(self.read_multi_point(reader, info)?)
            }
            GeometryKind::MultiLineString => {
                Geometry::MultiLineString(self.read_multi_line_string(reader, layout)?)
            }
            GeometryKind::MultiPolygon => {
                Geometry::MultiPolygon(self.read_multi_polygon(reader, layout)?)
            }
            GeometryKind::GeometryCollection => {
                Geometry::GeometryCollection(self.read_collection(reader, depth)?)
            }
        };
        Ok(geometry)
    }

    fn read_point(&self, reader: &mut ByteReader<'_>, layout: CoordinateLayout) -> Result<Point> {
        let mut coords = layout.read(reader, 1)?;
        coords
            .pop()
            .map(Point)
            .ok_or(GaiaError::InvalidCount { offset: reader.position(), count: 0 })
    }

    fn read_line_string(
        &self,
        reader: &mut ByteReader<'_>,
        layout: CoordinateLayout,
    ) -> Result<LineString> {
        let count = read_count(reader)?;
        Ok(LineString(layout.read(reader, count)?))
    }

    fn read_polygon(&self, reader: &mut ByteReader<'_>, layout: CoordinateLayout) -> Result<Polygon> {
        let offset = reader.position();
        let rings = read_count(reader)?;
        if rings == 0 {
            return Err(GaiaError::InvalidCount { offset, count: 0 });
        }

        let exterior = self.read_line_string(reader, layout)?;
        let mut interiors = Vec::with_capacity(bounded(rings - 1, reader.remaining(), 4));
        for _ in 1..rings {
            interiors.push(self.read_line_string(reader, layout)?);
        }
        Ok(Polygon::new(exterior, interiors))
    }

    /// Member points are always plain doubles. Their Z/M flags must match
    /// the outer code.
    fn read_multi_point(
        &self,
        reader: &mut ByteReader<'_>,
        info: &GeometryTypeInfo,
    ) -> Result<MultiPoint> {
        let count = read_count(reader)?;
        let mut points = Vec::with_capacity(bounded(count, reader.remaining(), MIN_POINT_MEMBER_SIZE));
        for _ in 0..count {
            let member = read_member_header(reader, Some(GeometryKind::Point))?;
            if member.has_z() != info.has_z() || member.has_m() != info.has_m() {
                return Err(GaiaError::MemberTypeMismatch {
                    expected: GeometryKind::Point,
                    found: member.code,
                });
            }
            points.push(Point(read_point_doubles(reader, info.has_z(), info.has_m())?));
        }
        Ok(MultiPoint(points))
    }

    fn read_multi_line_string(
        &self,
        reader: &mut ByteReader<'_>,
        layout: CoordinateLayout,
    ) -> Result<MultiLineString> {
        let count = read_count(reader)?;
        let mut lines = Vec::with_capacity(bounded(count, reader.remaining(), MIN_MEMBER_SIZE));
        for _ in 0..count {
            read_layout_member(reader, GeometryKind::LineString, layout)?;
            lines.push(self.read_line_string(reader, layout)?);
        }
        Ok(MultiLineString(lines))
    }

    fn read_multi_polygon(
        &self,
        reader: &mut ByteReader<'_>,
        layout: CoordinateLayout,
    ) -> Result<MultiPolygon> {
        let count = read_count(reader)?;
        let mut polygons = Vec::with_capacity(bounded(count, reader.remaining(), MIN_MEMBER_SIZE));
        for _ in 0..count {
            read_layout_member(reader, GeometryKind::Polygon, layout)?;
            polygons.push(self.read_polygon(reader, layout)?);
        }
        Ok(MultiPolygon(polygons))
    }

    /// Each member is classified on its own and picks its own layout.
    fn read_collection(&self, reader: &mut ByteReader<'_>, depth: usize) -> Result<GeometryCollection> {
        let member_depth = depth + 1;
        let count = read_count(reader)?;
        if count > 0 {
            if let Some(max) = self.max_depth {
                if member_depth > max {
                    return Err(GaiaError::NestingTooDeep(max));
                }
            }
        }

        let mut members = Vec::with_capacity(bounded(count, reader.remaining(), MIN_MEMBER_SIZE));
        for _ in 0..count {
            let member = read_member_header(reader, None)?;
            let layout = CoordinateLayout::for_type(&member);
            members.push(self.build_node(reader, &member, layout, member_depth)?);
        }
        Ok(GeometryCollection(members))
    }
}

/// Element count; negative values are rejected.
fn read_count(reader: &mut ByteReader<'_>) -> Result<usize> {
    let offset = reader.position();
    let count = reader.read_i32()?;
    usize::try_from(count).map_err(|_| GaiaError::InvalidCount { offset, count })
}

/// Entity marker and member type code, checked against `expected` when given.
fn read_member_header(
    reader: &mut ByteReader<'_>,
    expected: Option<GeometryKind>,
) -> Result<GeometryTypeInfo> {
    let offset = reader.position();
    let marker = reader.read_u8()?;
    if marker != markers::ENTITY {
        return Err(GaiaError::EntityMarkerMismatch {
            offset,
            found: marker,
        });
    }

    let code = reader.read_i32()?;
    let info = GeometryTypeInfo::classify(code);
    match (info, expected) {
        (Some(info), Some(kind)) if info.kind == kind => Ok(info),
        (_, Some(kind)) => Err(GaiaError::MemberTypeMismatch {
            expected: kind,
            found: code,
        }),
        (Some(info), None) => Ok(info),
        (None, None) => Err(GaiaError::UnknownMemberType(code)),
    }
}

/// Member header of a MultiLineString or MultiPolygon; the member must be
/// stored with the same coordinate layout as its parent.
fn read_layout_member(
    reader: &mut ByteReader<'_>,
    kind: GeometryKind,
    layout: CoordinateLayout,
) -> Result<()> {
    let member = read_member_header(reader, Some(kind))?;
    if CoordinateLayout::for_type(&member) != layout {
        return Err(GaiaError::MemberTypeMismatch {
            expected: kind,
            found: member.code,
        });
    }
    Ok(())
}

/// Clamp a declared count to what the remaining bytes could hold.
fn bounded(count: usize, remaining: usize, min_size: usize) -> usize {
    count.min(remaining / min_size)
}
