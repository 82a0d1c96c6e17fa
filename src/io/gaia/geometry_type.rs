//! Geometry type code classification.

use bitflags::bitflags;

use crate::types::GeometryKind;

use super::constants::type_codes::*;

bitflags! {
    /// Modifiers carried by a geometry type code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u8 {
        /// Coordinates carry an elevation.
        const HAS_Z = 1;
        /// Coordinates carry a measure.
        const HAS_M = 2;
        /// Coordinates after the first are stored as float deltas.
        const COMPRESSED = 4;
    }
}

/// A recognized geometry type code split into base shape and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryTypeInfo {
    pub code: i32,
    pub kind: GeometryKind,
    pub flags: TypeFlags,
}

impl GeometryTypeInfo {
    /// Look up a type code. Returns `None` for codes outside the table.
    pub fn classify(code: i32) -> Option<Self> {
        use GeometryKind::*;

        let xy = TypeFlags::empty();
        let z = TypeFlags::HAS_Z;
        let m = TypeFlags::HAS_M;
        let zm = TypeFlags::HAS_Z | TypeFlags::HAS_M;
        let c = TypeFlags::COMPRESSED;

        let (kind, flags) = match code {
            POINT => (Point, xy),
            LINESTRING => (LineString, xy),
            POLYGON => (Polygon, xy),
            MULTIPOINT => (MultiPoint, xy),
            MULTILINESTRING => (MultiLineString, xy),
            MULTIPOLYGON => (MultiPolygon, xy),
            GEOMETRYCOLLECTION => (GeometryCollection, xy),

            POINTZ => (Point, z),
            LINESTRINGZ => (LineString, z),
            POLYGONZ => (Polygon, z),
            MULTIPOINTZ => (MultiPoint, z),
            MULTILINESTRINGZ => (MultiLineString, z),
            MULTIPOLYGONZ => (MultiPolygon, z),
            GEOMETRYCOLLECTIONZ => (GeometryCollection, z),

            POINTM => (Point, m),
            LINESTRINGM => (LineString, m),
            POLYGONM => (Polygon, m),
            MULTIPOINTM => (MultiPoint, m),
            MULTILINESTRINGM => (MultiLineString, m),
            MULTIPOLYGONM => (MultiPolygon, m),
            GEOMETRYCOLLECTIONM => (GeometryCollection, m),

            POINTZM => (Point, zm),
            LINESTRINGZM => (LineString, zm),
            POLYGONZM => (Polygon, zm),
            MULTIPOINTZM => (MultiPoint, zm),
            MULTILINESTRINGZM => (MultiLineString, zm),
            MULTIPOLYGONZM => (MultiPolygon, zm),
            GEOMETRYCOLLECTIONZM => (GeometryCollection, zm),

            COMPRESSED_LINESTRING => (LineString, c),
            COMPRESSED_POLYGON => (Polygon, c),
            COMPRESSED_LINESTRINGZ => (LineString, c | z),
            COMPRESSED_POLYGONZ => (Polygon, c | z),
            COMPRESSED_LINESTRINGM => (LineString, c | m),
            COMPRESSED_POLYGONM => (Polygon, c | m),
            COMPRESSED_LINESTRINGZM => (LineString, c | zm),
            COMPRESSED_POLYGONZM => (Polygon, c | zm),

            _ => return None,
        };

        Some(Self { code, kind, flags })
    }

    pub fn has_z(&self) -> bool {
        self.flags.contains(TypeFlags::HAS_Z)
    }

    pub fn has_m(&self) -> bool {
        self.flags.contains(TypeFlags::HAS_M)
    }

    pub fn is_compressed(&self) -> bool {
        self.flags.contains(TypeFlags::COMPRESSED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_codes() {
        let info = GeometryTypeInfo::classify(POINT).unwrap();
        assert_eq!(info.kind, GeometryKind::Point);
        assert!(info.flags.is_empty());

        let info = GeometryTypeInfo::classify(GEOMETRYCOLLECTION).unwrap();
        assert_eq!(info.kind, GeometryKind::GeometryCollection);
    }

    #[test]
    fn test_dimension_offsets() {
        for (offset, z, m) in [(0, false, false), (1000, true, false), (2000, false, true), (3000, true, true)] {
            for base in POINT..=GEOMETRYCOLLECTION {
                let info = GeometryTypeInfo::classify(base + offset).unwrap();
                assert_eq!(info.has_z(), z, "code {}", base + offset);
                assert_eq!(info.has_m(), m, "code {}", base + offset);
                assert!(!info.is_compressed());
                assert_eq!(info.kind, GeometryTypeInfo::classify(base).unwrap().kind);
            }
        }
    }

    #[test]
    fn test_compressed_codes() {
        let info = GeometryTypeInfo::classify(COMPRESSED_POLYGONZM).unwrap();
        assert_eq!(info.kind, GeometryKind::Polygon);
        assert!(info.is_compressed() && info.has_z() && info.has_m());

        let info = GeometryTypeInfo::classify(COMPRESSED_LINESTRING).unwrap();
        assert_eq!(info.kind, GeometryKind::LineString);
        assert_eq!(info.flags, TypeFlags::COMPRESSED);
    }

    #[test]
    fn test_unknown_codes() {
        for code in [0, 8, 999, 1000, 1008, 4001, 1_000_001, 1_000_004, -1] {
            assert!(GeometryTypeInfo::classify(code).is_none(), "code {}", code);
        }
    }

    #[test]
    fn test_low_byte_does_not_decide_shape() {
        // 1001 & 0xFF == 0xE9; the table still maps it to a Point
        assert_eq!(GeometryTypeInfo::classify(POINTZ).unwrap().kind, GeometryKind::Point);
    }
}
