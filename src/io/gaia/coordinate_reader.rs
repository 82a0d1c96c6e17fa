//! Coordinate run decoding.
//!
//! A geometry's type code selects one of eight layouts: plain or compressed
//! storage, crossed with the XY / XYZ / XYM / XYZM dimension models. The
//! layout is chosen once per node and passed down to every ring and line.
//!
//! Compressed runs store the first coordinate as absolute doubles and every
//! following one as float deltas from the previously decoded coordinate
//! (`x + dx`, `y - dy`, `z + dz`). M values, plain or delta, are consumed and
//! discarded.

use crate::error::Result;
use crate::types::Coordinate;

use super::byte_reader::ByteReader;
use super::geometry_type::GeometryTypeInfo;

/// Storage layout of a coordinate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateLayout {
    Xy,
    Xyz,
    Xym,
    Xyzm,
    CompressedXy,
    CompressedXyz,
    CompressedXym,
    CompressedXyzm,
}

impl CoordinateLayout {
    /// Select the layout for a classified type code.
    pub fn for_type(info: &GeometryTypeInfo) -> Self {
        match (info.is_compressed(), info.has_z(), info.has_m()) {
            (false, false, false) => CoordinateLayout::Xy,
            (false, true, false) => CoordinateLayout::Xyz,
            (false, false, true) => CoordinateLayout::Xym,
            (false, true, true) => CoordinateLayout::Xyzm,
            (true, false, false) => CoordinateLayout::CompressedXy,
            (true, true, false) => CoordinateLayout::CompressedXyz,
            (true, false, true) => CoordinateLayout::CompressedXym,
            (true, true, true) => CoordinateLayout::CompressedXyzm,
        }
    }

    pub fn has_z(self) -> bool {
        matches!(
            self,
            CoordinateLayout::Xyz
                | CoordinateLayout::Xyzm
                | CoordinateLayout::CompressedXyz
                | CoordinateLayout::CompressedXyzm
        )
    }

    pub fn has_m(self) -> bool {
        matches!(
            self,
            CoordinateLayout::Xym
                | CoordinateLayout::Xyzm
                | CoordinateLayout::CompressedXym
                | CoordinateLayout::CompressedXyzm
        )
    }

    pub fn is_compressed(self) -> bool {
        matches!(
            self,
            CoordinateLayout::CompressedXy
                | CoordinateLayout::CompressedXyz
                | CoordinateLayout::CompressedXym
                | CoordinateLayout::CompressedXyzm
        )
    }

    /// Number of ordinates stored per coordinate
    fn ordinates(self) -> usize {
        2 + self.has_z() as usize + self.has_m() as usize
    }

    /// Smallest number of bytes any coordinate of this layout occupies.
    pub fn min_coordinate_size(self) -> usize {
        if self.is_compressed() {
            self.ordinates() * 4
        } else {
            self.ordinates() * 8
        }
    }

    /// Read `count` coordinates.
    pub fn read(self, reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<Coordinate>> {
        let capacity = count.min(reader.remaining() / self.min_coordinate_size());
        let mut coords = Vec::with_capacity(capacity);
        if count == 0 {
            return Ok(coords);
        }

        if !self.is_compressed() {
            for _ in 0..count {
                coords.push(self.read_absolute(reader)?);
            }
            return Ok(coords);
        }

        let mut prev = self.read_absolute(reader)?;
        coords.push(prev);
        for _ in 1..count {
            let dx = reader.read_f32()?;
            let dy = reader.read_f32()?;
            let dz = if self.has_z() {
                Some(reader.read_f32()?)
            } else {
                None
            };
            if self.has_m() {
                reader.read_f32()?;
            }
            prev = prev.offset_by(dx, dy, dz);
            coords.push(prev);
        }
        Ok(coords)
    }

    /// One coordinate stored as doubles.
    fn read_absolute(self, reader: &mut ByteReader<'_>) -> Result<Coordinate> {
        read_point_doubles(reader, self.has_z(), self.has_m())
    }
}

/// X, Y, then optional Z and M doubles. M is dropped.
pub(crate) fn read_point_doubles(
    reader: &mut ByteReader<'_>,
    has_z: bool,
    has_m: bool,
) -> Result<Coordinate> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    let z = if has_z { Some(reader.read_f64()?) } else { None };
    if has_m {
        reader.read_f64()?;
    }
    Ok(Coordinate { x, y, z })
}
