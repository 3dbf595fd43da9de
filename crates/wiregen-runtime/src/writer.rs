//! Growable little-endian writer

use crate::date::Date;
use crate::Guid;

/// Size of a length prefix on the wire
const LENGTH_SIZE: usize = 4;

/// Append-only buffer for encoding.
///
/// All multi-byte values are little-endian. Lengths and counts are written
/// as `u32`; callers must keep collections below `u32::MAX` elements.
#[derive(Debug, Clone, Default)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a writer with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes written so far
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the encoded bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    #[inline]
    pub fn write_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buffer.push(u8::from(value));
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_i64(&mut self, value: i64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a collection length or element count as `u32`
    #[inline]
    pub fn write_length(&mut self, length: usize) {
        self.write_u32(wire_length(length));
    }

    /// Write a `u32` byte length followed by UTF-8 bytes
    pub fn write_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    /// Write a GUID in mixed-endian order (first three groups little-endian)
    pub fn write_guid(&mut self, value: &Guid) {
        self.buffer.extend_from_slice(&value.to_bytes_le());
    }

    /// Write a date as its raw 64-bit wire value
    pub fn write_date(&mut self, value: Date) {
        self.write_u64(value.to_wire());
    }

    /// Write a `u32` count followed by the raw bytes
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.write_length(value.len());
        self.buffer.extend_from_slice(value);
    }

    /// Write a `u32` count followed by every element, reserving space once
    pub fn write_f32_slice(&mut self, values: &[f32]) {
        self.write_length(values.len());
        self.buffer.reserve(values.len() * size_of::<f32>());
        for value in values {
            self.buffer.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Write a `u32` count followed by every element, reserving space once
    pub fn write_f64_slice(&mut self, values: &[f64]) {
        self.write_length(values.len());
        self.buffer.reserve(values.len() * size_of::<f64>());
        for value in values {
            self.buffer.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Write a zeroed length placeholder and return its offset
    pub fn reserve_length(&mut self) -> usize {
        let at = self.buffer.len();
        self.buffer.extend_from_slice(&[0; LENGTH_SIZE]);
        at
    }

    /// Overwrite the placeholder at `at` with `length`
    ///
    /// # Panics
    ///
    /// Panics if `at` was not returned by [`reserve_length`](Self::reserve_length)
    /// on this writer.
    pub fn fill_length(&mut self, at: usize, length: usize) {
        let bytes = wire_length(length).to_le_bytes();
        self.buffer[at..at + LENGTH_SIZE].copy_from_slice(&bytes);
    }
}

impl From<BinaryWriter> for Vec<u8> {
    fn from(writer: BinaryWriter) -> Self {
        writer.into_inner()
    }
}

#[inline]
fn wire_length(length: usize) -> u32 {
    debug_assert!(
        u32::try_from(length).is_ok(),
        "length {length} does not fit the u32 wire prefix"
    );
    length as u32
}
