//! Minimum bounding rectangle stored in every geometry BLOB

use super::Coordinate;
use std::fmt;

/// 2D envelope (MBR), in the BLOB's storage order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// Create a new envelope from its four bounds
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Envelope {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create an envelope that contains all given coordinates
    pub fn from_coordinates(coords: &[Coordinate]) -> Option<Self> {
        let (first, rest) = coords.split_first()?;
        let mut env = Envelope::new(first.x, first.y, first.x, first.y);
        for c in rest {
            env.expand_to_include(c);
        }
        Some(env)
    }

    /// Check if this envelope contains a coordinate (Z is ignored)
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    /// Expand the envelope to include another coordinate
    pub fn expand_to_include(&mut self, c: &Coordinate) {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Envelope[({}, {}) -> ({}, {})]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coordinates() {
        let coords = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 5.0),
            Coordinate::new(-5.0, 3.0),
        ];
        let env = Envelope::from_coordinates(&coords).unwrap();
        assert_eq!(env, Envelope::new(-5.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn test_from_no_coordinates() {
        assert!(Envelope::from_coordinates(&[]).is_none());
    }

    #[test]
    fn test_contains() {
        let env = Envelope::new(0.0, 0.0, 10.0, 10.0);
        assert!(env.contains(&Coordinate::new(5.0, 5.0)));
        assert!(env.contains(&Coordinate::new(10.0, 0.0)));
        assert!(!env.contains(&Coordinate::new(10.5, 5.0)));
    }
}
