//! Coordinate type for decoded geometries

use std::fmt;

/// A single decoded position.
///
/// X and Y are always present. Z is present for the `XYZ` and `XYZM`
/// dimension models; M values are consumed from the BLOB but not kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    /// Create a 2D coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: None }
    }

    /// Create a 3D coordinate
    pub const fn new_z(x: f64, y: f64, z: f64) -> Self {
        Coordinate { x, y, z: Some(z) }
    }

    /// Whether this coordinate carries an elevation
    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// Offset this coordinate by a compressed delta record.
    ///
    /// Y deltas are subtracted; X and Z deltas are added. A Z delta is only
    /// applied when the coordinate itself has a Z value.
    pub(crate) fn offset_by(&self, dx: f32, dy: f32, dz: Option<f32>) -> Self {
        Coordinate {
            x: self.x + dx as f64,
            y: self.y - dy as f64,
            z: match (self.z, dz) {
                (Some(z), Some(dz)) => Some(z + dz as f64),
                (z, _) => z,
            },
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::new(0.0, 0.0)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "({}, {}, {})", self.x, self.y, z),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
