//! Position-tracked cursors over borrowed byte buffers.
//!
//! `ReadCursor` and `WriteCursor` are the views the codec layer works
//! through:
//! - every primitive access is big-endian and bounds-checked
//! - reads hand out sub-slices of the backing buffer without copying
//! - a write cursor holds the only `&mut` borrow of its buffer, so a
//!   second writer over the same region cannot exist while it lives
//!
//! A failed get or put leaves the position where it was; after an error
//! the surrounding decode or encode pass is expected to abandon the
//! cursor rather than resume it.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{ErrorKind, Result};

// ============================================================================
// Read side
// ============================================================================

/// A shared view over a byte buffer plus a read position.
///
/// Slices returned by [`get_slice`](ReadCursor::get_slice) and
/// [`rest`](ReadCursor::rest) borrow from the backing buffer, not from the
/// cursor, so they stay usable after the cursor is gone.
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Creates a cursor at position 0 over `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an absolute position.
    /// Panics if `pos` is past the end of the buffer.
    pub fn set_position(&mut self, pos: usize) {
        assert!(pos <= self.buf.len(), "position out of bounds");
        self.pos = pos;
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the total size of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true when no bytes are left to read.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(ErrorKind::BufferUnderflow { needed: len, remaining: self.remaining() });
        }
        let span = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(span)
    }

    /// Reads one unsigned byte.
    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Reads one signed byte.
    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(self.get_u8()? as i8)
    }

    /// Reads a big-endian u16.
    pub fn get_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    /// Reads a big-endian i16.
    pub fn get_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    /// Reads a big-endian u32.
    pub fn get_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    /// Reads a big-endian i32.
    pub fn get_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    /// Reads a big-endian u64.
    pub fn get_u64(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    /// Reads a big-endian i64.
    pub fn get_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    /// Reads `len` bytes as a sub-slice of the backing buffer, without
    /// copying, and advances past them.
    pub fn get_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Returns the unread remainder without advancing.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns an independent cursor over the unread remainder.
    ///
    /// The new cursor starts at position 0 and shares the backing bytes;
    /// advancing it does not move `self`.
    pub fn slice(&self) -> ReadCursor<'a> {
        ReadCursor::new(self.rest())
    }
}

impl<'a> From<&'a [u8]> for ReadCursor<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

// ============================================================================
// Write side
// ============================================================================

/// An exclusive view over a byte buffer plus a write position.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Creates a cursor at position 0 over `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the current position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an absolute position.
    /// Panics if `pos` is past the end of the buffer.
    pub fn set_position(&mut self, pos: usize) {
        assert!(pos <= self.buf.len(), "position out of bounds");
        self.pos = pos;
    }

    /// Returns the capacity left to write into.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the total size of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn claim(&mut self, len: usize) -> Result<&mut [u8]> {
        if self.remaining() < len {
            return Err(ErrorKind::BufferOverflow { needed: len, remaining: self.remaining() });
        }
        let span = &mut self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(span)
    }

    /// Writes one unsigned byte.
    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        self.claim(1)?[0] = value;
        Ok(())
    }

    /// Writes one signed byte.
    pub fn put_i8(&mut self, value: i8) -> Result<()> {
        self.put_u8(value as u8)
    }

    /// Writes a big-endian u16.
    pub fn put_u16(&mut self, value: u16) -> Result<()> {
        BigEndian::write_u16(self.claim(2)?, value);
        Ok(())
    }

    /// Writes a big-endian i16.
    pub fn put_i16(&mut self, value: i16) -> Result<()> {
        BigEndian::write_i16(self.claim(2)?, value);
        Ok(())
    }

    /// Writes a big-endian u32.
    pub fn put_u32(&mut self, value: u32) -> Result<()> {
        BigEndian::write_u32(self.claim(4)?, value);
        Ok(())
    }

    /// Writes a big-endian i32.
    pub fn put_i32(&mut self, value: i32) -> Result<()> {
        BigEndian::write_i32(self.claim(4)?, value);
        Ok(())
    }

    /// Writes a big-endian u64.
    pub fn put_u64(&mut self, value: u64) -> Result<()> {
        BigEndian::write_u64(self.claim(8)?, value);
        Ok(())
    }

    /// Writes a big-endian i64.
    pub fn put_i64(&mut self, value: i64) -> Result<()> {
        BigEndian::write_i64(self.claim(8)?, value);
        Ok(())
    }

    /// Writes all of `bytes` at the current position.
    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.claim(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Returns the bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl<'a> From<&'a mut [u8]> for WriteCursor<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        Self::new(buf)
    }
}
