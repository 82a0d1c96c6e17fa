//! Test blob builders.
//!
//! The library only reads; these helpers write BLOBs in either byte order so
//! the tests can describe a geometry payload field by field.

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use gaiageo::io::gaia::constants::markers;

/// Writes payload primitives in a fixed byte order.
pub struct PayloadWriter {
    big_endian: bool,
    buf: Vec<u8>,
}

impl PayloadWriter {
    pub fn new(big_endian: bool) -> Self {
        Self {
            big_endian,
            buf: Vec::new(),
        }
    }

    pub fn byte(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        if self.big_endian {
            self.buf.write_i32::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_i32::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn f64(&mut self, v: f64) -> &mut Self {
        if self.big_endian {
            self.buf.write_f64::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_f64::<LittleEndian>(v).unwrap();
        }
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        if self.big_endian {
            self.buf.write_f32::<BigEndian>(v).unwrap();
        } else {
            self.buf.write_f32::<LittleEndian>(v).unwrap();
        }
        self
    }

    /// Consecutive doubles
    pub fn doubles(&mut self, values: &[f64]) -> &mut Self {
        for v in values {
            self.f64(*v);
        }
        self
    }

    /// Consecutive floats
    pub fn floats(&mut self, values: &[f32]) -> &mut Self {
        for v in values {
            self.f32(*v);
        }
        self
    }

    /// Entity marker followed by a member type code
    pub fn member(&mut self, code: i32) -> &mut Self {
        self.byte(markers::ENTITY).i32(code)
    }

    /// Count followed by XY doubles
    pub fn xy_ring(&mut self, coords: &[(f64, f64)]) -> &mut Self {
        self.i32(coords.len() as i32);
        for (x, y) in coords {
            self.f64(*x).f64(*y);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Builds a complete geometry BLOB around a payload.
pub struct BlobBuilder {
    code: i32,
    srid: i32,
    mbr: [f64; 4],
    big_endian: bool,
}

impl BlobBuilder {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            srid: 0,
            mbr: [0.0; 4],
            big_endian: false,
        }
    }

    pub fn srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn mbr(mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        self.mbr = [min_x, min_y, max_x, max_y];
        self
    }

    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    /// Write header, payload and end marker.
    pub fn build<F: FnOnce(&mut PayloadWriter)>(self, payload: F) -> Vec<u8> {
        let mut w = PayloadWriter::new(self.big_endian);
        w.byte(markers::START);
        w.byte(if self.big_endian {
            markers::BIG_ENDIAN
        } else {
            markers::LITTLE_ENDIAN
        });
        w.i32(self.srid);
        w.doubles(&self.mbr);
        w.byte(markers::MBR);
        w.i32(self.code);
        payload(&mut w);
        w.byte(markers::END);
        w.into_bytes()
    }
}
