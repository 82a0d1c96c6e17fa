//! Endian-aware primitive reads over an in-memory BLOB.
//!
//! The BLOB declares its byte order in the endian marker; values are read
//! in host order and byte-swapped when the two differ. Every read is
//! bounds-checked before the cursor advances.

use byteorder::{ByteOrder, NativeEndian};

use crate::error::{GaiaError, Result};

use super::constants::markers;

/// Cursor over a geometry BLOB.
///
/// Owns the read position; every decode helper takes it as `&mut` so the
/// position is never shared between calls.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
    swap: bool,
}

impl<'a> ByteReader<'a> {
    /// Create a reader for data stored with the given endian marker.
    pub fn new(data: &'a [u8], endian_marker: u8) -> Result<Self> {
        let swap = match endian_marker {
            markers::LITTLE_ENDIAN => cfg!(target_endian = "big"),
            markers::BIG_ENDIAN => cfg!(target_endian = "little"),
            other => return Err(GaiaError::UnknownEndianMarker(other)),
        };
        Ok(Self {
            data,
            position: 0,
            swap,
        })
    }

    /// Whether stored values are byte-swapped relative to the host
    pub fn needs_swap(&self) -> bool {
        self.swap
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Borrow the next `n` bytes and advance past them.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(GaiaError::BufferUnderrun {
                offset: self.position,
                needed: n,
                available,
            });
        }
        let bytes = &self.data[self.position..self.position + n];
        self.position += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let raw = NativeEndian::read_u32(self.take(4)?);
        Ok(self.order_u32(raw) as i32)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let raw = NativeEndian::read_u64(self.take(8)?);
        Ok(f64::from_bits(if self.swap { raw.swap_bytes() } else { raw }))
    }

    /// Single precision value; only used for compressed coordinate deltas.
    pub fn read_f32(&mut self) -> Result<f32> {
        let raw = NativeEndian::read_u32(self.take(4)?);
        Ok(f32::from_bits(self.order_u32(raw)))
    }

    fn order_u32(&self, raw: u32) -> u32 {
        if self.swap {
            raw.swap_bytes()
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_marker_is_fatal() {
        let err = ByteReader::new(&[0u8; 4], 0x02).unwrap_err();
        assert!(matches!(err, GaiaError::UnknownEndianMarker(0x02)));
    }

    #[test]
    fn test_little_endian_reads() {
        let mut data = Vec::new();
        data.extend_from_slice(&4326i32.to_le_bytes());
        data.extend_from_slice(&1.5f64.to_le_bytes());
        data.extend_from_slice(&(-0.25f32).to_le_bytes());

        let mut r = ByteReader::new(&data, markers::LITTLE_ENDIAN).unwrap();
        assert_eq!(r.read_i32().unwrap(), 4326);
        assert_eq!(r.read_f64().unwrap(), 1.5);
        assert_eq!(r.read_f32().unwrap(), -0.25);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_big_endian_reads() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-7i32).to_be_bytes());
        data.extend_from_slice(&123.456f64.to_be_bytes());
        data.extend_from_slice(&3.5f32.to_be_bytes());

        let mut r = ByteReader::new(&data, markers::BIG_ENDIAN).unwrap();
        assert_eq!(r.read_i32().unwrap(), -7);
        assert_eq!(r.read_f64().unwrap(), 123.456);
        assert_eq!(r.read_f32().unwrap(), 3.5);
        assert_eq!(r.position(), 16);
    }

    #[test]
    fn test_swap_flag_matches_host() {
        let le = ByteReader::new(&[], markers::LITTLE_ENDIAN).unwrap();
        let be = ByteReader::new(&[], markers::BIG_ENDIAN).unwrap();
        assert_ne!(le.needs_swap(), be.needs_swap());
    }

    #[test]
    fn test_underrun_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut r = ByteReader::new(&data, markers::LITTLE_ENDIAN).unwrap();
        r.set_position(1);
        match r.read_i32() {
            Err(GaiaError::BufferUnderrun {
                offset,
                needed,
                available,
            }) => {
                assert_eq!(offset, 1);
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected underrun, got {:?}", other),
        }
        assert_eq!(r.position(), 1);
        assert_eq!(r.read_u8().unwrap(), 2);
    }

    #[test]
    fn test_position_past_end() {
        let data = [0u8; 2];
        let mut r = ByteReader::new(&data, markers::LITTLE_ENDIAN).unwrap();
        r.set_position(10);
        assert_eq!(r.remaining(), 0);
        assert!(r.read_u8().is_err());
    }
}
