//! Marker bytes, header layout and type codes of the SpatiaLite geometry BLOB.
//!
//! Values follow SpatiaLite's `gaiageo.h`.

/// Marker bytes at fixed positions in the BLOB.
pub mod markers {
    /// Byte 0
    pub const START: u8 = 0x00;
    /// Last byte
    pub const END: u8 = 0xFE;
    /// Byte 38, closing the MBR
    pub const MBR: u8 = 0x7C;
    /// Precedes every member of a multi-geometry or collection
    pub const ENTITY: u8 = 0x69;
    /// Byte 1 value for big endian payloads
    pub const BIG_ENDIAN: u8 = 0x00;
    /// Byte 1 value for little endian payloads
    pub const LITTLE_ENDIAN: u8 = 0x01;
}

/// Byte offsets of the fixed header.
pub mod layout {
    /// Shortest possible geometry BLOB
    pub const MIN_BLOB_SIZE: usize = 45;
    pub const START_MARKER: usize = 0;
    pub const ENDIAN_MARKER: usize = 1;
    pub const SRID: usize = 2;
    /// minX, minY, maxX, maxY as doubles
    pub const MBR: usize = 6;
    pub const MBR_MARKER: usize = 38;
    pub const GEOMETRY_TYPE: usize = 39;
    pub const PAYLOAD: usize = 43;
}

/// Geometry type codes.
///
/// Dimension models add 1000 (XYZ), 2000 (XYM) or 3000 (XYZM) to the XY
/// code. Only linestrings and polygons have compressed variants, offset by
/// 1_000_000.
pub mod type_codes {
    pub const POINT: i32 = 1;
    pub const LINESTRING: i32 = 2;
    pub const POLYGON: i32 = 3;
    pub const MULTIPOINT: i32 = 4;
    pub const MULTILINESTRING: i32 = 5;
    pub const MULTIPOLYGON: i32 = 6;
    pub const GEOMETRYCOLLECTION: i32 = 7;

    pub const POINTZ: i32 = 1001;
    pub const LINESTRINGZ: i32 = 1002;
    pub const POLYGONZ: i32 = 1003;
    pub const MULTIPOINTZ: i32 = 1004;
    pub const MULTILINESTRINGZ: i32 = 1005;
    pub const MULTIPOLYGONZ: i32 = 1006;
    pub const GEOMETRYCOLLECTIONZ: i32 = 1007;

    pub const POINTM: i32 = 2001;
    pub const LINESTRINGM: i32 = 2002;
    pub const POLYGONM: i32 = 2003;
    pub const MULTIPOINTM: i32 = 2004;
    pub const MULTILINESTRINGM: i32 = 2005;
    pub const MULTIPOLYGONM: i32 = 2006;
    pub const GEOMETRYCOLLECTIONM: i32 = 2007;

    pub const POINTZM: i32 = 3001;
    pub const LINESTRINGZM: i32 = 3002;
    pub const POLYGONZM: i32 = 3003;
    pub const MULTIPOINTZM: i32 = 3004;
    pub const MULTILINESTRINGZM: i32 = 3005;
    pub const MULTIPOLYGONZM: i32 = 3006;
    pub const GEOMETRYCOLLECTIONZM: i32 = 3007;

    pub const COMPRESSED_LINESTRING: i32 = 1_000_002;
    pub const COMPRESSED_POLYGON: i32 = 1_000_003;
    pub const COMPRESSED_LINESTRINGZ: i32 = 1_001_002;
    pub const COMPRESSED_POLYGONZ: i32 = 1_001_003;
    pub const COMPRESSED_LINESTRINGM: i32 = 1_002_002;
    pub const COMPRESSED_POLYGONM: i32 = 1_002_003;
    pub const COMPRESSED_LINESTRINGZM: i32 = 1_003_002;
    pub const COMPRESSED_POLYGONZM: i32 = 1_003_003;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fits_minimum_size() {
        assert!(layout::MIN_BLOB_SIZE > layout::PAYLOAD + 1);
        assert_eq!(layout::MBR + 4 * 8, layout::MBR_MARKER);
    }

    #[test]
    fn test_endian_markers_distinct() {
        assert_ne!(markers::BIG_ENDIAN, markers::LITTLE_ENDIAN);
    }
}
