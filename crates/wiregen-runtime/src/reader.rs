//! Bounds-checked little-endian reader

use crate::date::Date;
use crate::error::{DecodeError, DecodeResult};
use crate::Guid;

/// Cursor over a borrowed byte slice.
///
/// Every read is bounds-checked and fails with
/// [`DecodeError::UnexpectedEof`] instead of panicking.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of `buffer`
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current read offset
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total input length
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes left to read
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Move the cursor to an absolute offset
    pub fn seek(&mut self, target: usize) -> DecodeResult<()> {
        if target > self.buffer.len() {
            return Err(DecodeError::SeekOutOfBounds {
                target,
                available: self.buffer.len(),
            });
        }
        self.position = target;
        Ok(())
    }

    fn take(&mut self, needed: usize) -> DecodeResult<&'a [u8]> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::UnexpectedEof {
                position: self.position,
                needed,
                remaining,
            });
        }
        let slice = &self.buffer[self.position..self.position + needed];
        self.position += needed;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    #[inline]
    pub fn read_byte(&mut self) -> DecodeResult<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    /// Any nonzero byte reads as `true`
    #[inline]
    pub fn read_bool(&mut self) -> DecodeResult<bool> {
        Ok(self.read_byte()? != 0)
    }

    #[inline]
    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_i16(&mut self) -> DecodeResult<i16> {
        Ok(i16::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_f32(&mut self) -> DecodeResult<f32> {
        Ok(f32::from_le_bytes(self.take_array()?))
    }

    #[inline]
    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    /// Read a `u32` length or element count
    #[inline]
    pub fn read_length(&mut self) -> DecodeResult<usize> {
        Ok(self.read_u32()? as usize)
    }

    /// Read a `u32` element count for elements of at least `min_size` bytes
    /// each, failing early when that many elements cannot fit in the unread
    /// input.
    ///
    /// A `min_size` of zero (arrays of empty structs) accepts any count.
    pub fn read_count(&mut self, min_size: usize) -> DecodeResult<usize> {
        let position = self.position;
        let count = self.read_length()?;
        let needed = count.saturating_mul(min_size);
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::CountExceedsInput {
                position,
                count,
                needed,
                remaining,
            });
        }
        Ok(count)
    }

    /// Clamp a decoded element count to a safe preallocation size.
    ///
    /// Counts come from untrusted input, so capacity never exceeds the
    /// number of unread bytes.
    #[inline]
    pub fn bounded_capacity(&self, count: usize) -> usize {
        count.min(self.remaining())
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> DecodeResult<String> {
        let length = self.read_length()?;
        let position = self.position;
        let bytes = self.take(length)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 { position })
    }

    /// Read a GUID stored in mixed-endian order
    pub fn read_guid(&mut self) -> DecodeResult<Guid> {
        Ok(Guid::from_bytes_le(self.take_array()?))
    }

    pub fn read_date(&mut self) -> DecodeResult<Date> {
        Ok(Date::from_wire(self.read_u64()?))
    }

    /// Read a `u32` count followed by that many raw bytes
    pub fn read_bytes(&mut self) -> DecodeResult<Vec<u8>> {
        let length = self.read_length()?;
        Ok(self.take(length)?.to_vec())
    }

    /// Read a message length prefix and return the absolute offset where the
    /// message body ends.
    pub fn read_message_end(&mut self) -> DecodeResult<usize> {
        let length = self.read_length()?;
        let available = self.buffer.len();
        match self.position.checked_add(length) {
            Some(end) if end <= available => Ok(end),
            _ => Err(DecodeError::FrameOutOfBounds {
                end: self.position.saturating_add(length),
                available,
            }),
        }
    }

    /// Read the next field tag of a message ending at `end`.
    ///
    /// A well-formed body always has a terminator before `end`, so reaching
    /// `end` here means the input is corrupt.
    pub fn read_message_tag(&mut self, end: usize) -> DecodeResult<u8> {
        if self.position >= end {
            return Err(DecodeError::MissingTerminator { end });
        }
        self.read_byte()
    }

    /// Abandon the rest of a message body after an unrecognized tag
    pub fn skip_to(&mut self, end: usize) -> DecodeResult<()> {
        tracing::trace!(
            from = self.position,
            to = end,
            "skipping unknown message fields"
        );
        self.seek(end)
    }
}

#[cfg(test)]
#[path = "reader/reader_tests.rs"]
mod reader_tests;
