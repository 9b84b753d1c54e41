//! The primitive wire-type catalog.
//!
//! Every field of a protocol message is one of a closed set of primitive
//! representations. Each catalog member answers the same four questions:
//! - `validate`: is this value in my domain?
//! - `size_of`: exactly how many bytes will it occupy?
//! - `write`: encode it at the cursor position
//! - `read`: decode one value at the cursor position
//!
//! For any value accepted by `validate`, `write` advances the cursor by
//! exactly `size_of` bytes and `read` over those bytes reproduces an equal
//! value. Schema composition (structs, arrays, nested records) is layered
//! on top of these operations and lives outside this crate.

use std::fmt;

use bytewire_core::{
    constants::{
        BYTES_PREFIX_WIDTH, INT16_WIDTH, INT32_WIDTH, INT64_WIDTH, INT8_WIDTH, MAX_BYTES_LEN,
        MAX_STRING_LEN, STRING_PREFIX_WIDTH,
    },
    cursor::{ReadCursor, WriteCursor},
    error::{ErrorKind, MalformedKind, Result},
};

use crate::value::Value;

/// The closed set of primitive wire representations.
///
/// Integers are big-endian two's-complement. STRING carries a 16-bit
/// big-endian length prefix followed by UTF-8 bytes; BYTES carries a
/// 32-bit big-endian length prefix followed by raw bytes. Members are
/// plain `Copy` constants and safe to use from any thread.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireType {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer, big-endian.
    Int16,
    /// 32-bit signed integer, big-endian.
    Int32,
    /// 64-bit signed integer, big-endian.
    Int64,
    /// Length-prefixed UTF-8 string.
    String,
    /// Length-prefixed raw byte sequence.
    Bytes,
}

impl WireType {
    /// Every catalog member, in declaration order.
    pub const ALL: [WireType; 6] = [
        WireType::Int8,
        WireType::Int16,
        WireType::Int32,
        WireType::Int64,
        WireType::String,
        WireType::Bytes,
    ];

    /// The catalog name of this type.
    pub fn name(self) -> &'static str {
        match self {
            WireType::Int8 => "INT8",
            WireType::Int16 => "INT16",
            WireType::Int32 => "INT32",
            WireType::Int64 => "INT64",
            WireType::String => "STRING",
            WireType::Bytes => "BYTES",
        }
    }

    /// Description of this type's domain, as used in validation errors.
    pub fn expectation(self) -> &'static str {
        match self {
            WireType::Int8 => "an 8-bit integer",
            WireType::Int16 => "a 16-bit integer",
            WireType::Int32 => "a 32-bit integer",
            WireType::Int64 => "a 64-bit integer",
            WireType::String => "a UTF-8 string",
            WireType::Bytes => "a byte sequence",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// The four-operation contract
// ============================================================================

impl WireType {
    /// Checks that `value` is in this type's domain and returns it
    /// unchanged.
    ///
    /// Never touches a cursor. The check is on the declared representation,
    /// not numeric fit: `Value::Int32(5)` is rejected by `Int8` even though
    /// 5 fits in an i8. STRING and BYTES additionally enforce their
    /// length-prefix bounds here, so a value accepted by `validate` is
    /// guaranteed encodable.
    pub fn validate<'a>(self, value: Value<'a>) -> Result<Value<'a>> {
        match self {
            WireType::Int8 => value.as_i8().map(|_| value),
            WireType::Int16 => value.as_i16().map(|_| value),
            WireType::Int32 => value.as_i32().map(|_| value),
            WireType::Int64 => value.as_i64().map(|_| value),
            WireType::String => {
                let s = value.as_str()?;
                if s.len() > MAX_STRING_LEN {
                    return Err(oversize_string(s.len()));
                }
                Ok(value)
            }
            WireType::Bytes => {
                let b = value.as_bytes()?;
                if b.len() > MAX_BYTES_LEN {
                    return Err(oversize_bytes(b.len()));
                }
                Ok(value)
            }
        }
    }

    /// Returns the exact number of bytes [`write`](WireType::write) emits
    /// for `value`.
    ///
    /// Constant for the integer types, value-dependent for the
    /// length-prefixed ones. Rejects a mismatched tag so that sizes are
    /// only ever reported for encodable values.
    pub fn size_of(self, value: Value<'_>) -> Result<usize> {
        match self {
            WireType::Int8 => value.as_i8().map(|_| INT8_WIDTH),
            WireType::Int16 => value.as_i16().map(|_| INT16_WIDTH),
            WireType::Int32 => value.as_i32().map(|_| INT32_WIDTH),
            WireType::Int64 => value.as_i64().map(|_| INT64_WIDTH),
            WireType::String => value.as_str().map(|s| STRING_PREFIX_WIDTH + s.len()),
            WireType::Bytes => value.as_bytes().map(|b| BYTES_PREFIX_WIDTH + b.len()),
        }
    }

    /// Encodes `value` at the cursor position and advances by exactly
    /// [`size_of`](WireType::size_of) bytes.
    ///
    /// The value's tag is re-checked before any byte is written, and the
    /// length-prefixed types check capacity for prefix plus payload up
    /// front, so a failed write leaves the buffer untouched.
    pub fn write(self, cursor: &mut WriteCursor<'_>, value: Value<'_>) -> Result<()> {
        match self {
            WireType::Int8 => cursor.put_i8(value.as_i8()?),
            WireType::Int16 => cursor.put_i16(value.as_i16()?),
            WireType::Int32 => cursor.put_i32(value.as_i32()?),
            WireType::Int64 => cursor.put_i64(value.as_i64()?),
            WireType::String => {
                let s = value.as_str()?;
                if s.len() > MAX_STRING_LEN {
                    return Err(oversize_string(s.len()));
                }
                let needed = STRING_PREFIX_WIDTH + s.len();
                if cursor.remaining() < needed {
                    return Err(ErrorKind::BufferOverflow { needed, remaining: cursor.remaining() });
                }
                cursor.put_u16(s.len() as u16)?;
                cursor.put_slice(s.as_bytes())
            }
            WireType::Bytes => {
                let b = value.as_bytes()?;
                if b.len() > MAX_BYTES_LEN {
                    return Err(oversize_bytes(b.len()));
                }
                let needed = BYTES_PREFIX_WIDTH + b.len();
                if cursor.remaining() < needed {
                    return Err(ErrorKind::BufferOverflow { needed, remaining: cursor.remaining() });
                }
                cursor.put_u32(b.len() as u32)?;
                cursor.put_slice(b)
            }
        }
    }

    /// Decodes one value at the cursor position, advancing past exactly
    /// the bytes consumed.
    ///
    /// STRING and BYTES payloads are handed out as views into the receive
    /// buffer, valid for the buffer's lifetime, without copying. A length
    /// prefix no conforming writer can produce is reported as malformed
    /// rather than as an underflow.
    pub fn read<'a>(self, cursor: &mut ReadCursor<'a>) -> Result<Value<'a>> {
        match self {
            WireType::Int8 => Ok(Value::Int8(cursor.get_i8()?)),
            WireType::Int16 => Ok(Value::Int16(cursor.get_i16()?)),
            WireType::Int32 => Ok(Value::Int32(cursor.get_i32()?)),
            WireType::Int64 => Ok(Value::Int64(cursor.get_i64()?)),
            WireType::String => {
                let len = cursor.get_u16()? as usize;
                if len > MAX_STRING_LEN {
                    tracing::warn!(
                        "Rejecting STRING length prefix {} beyond maximum {}",
                        len,
                        MAX_STRING_LEN
                    );
                    return Err(ErrorKind::Malformed(MalformedKind::StringLength(len)));
                }
                let raw = cursor.get_slice(len)?;
                let s = std::str::from_utf8(raw)
                    .map_err(|e| ErrorKind::Malformed(MalformedKind::Utf8(e)))?;
                Ok(Value::String(s))
            }
            WireType::Bytes => {
                let len = cursor.get_u32()? as usize;
                if len > MAX_BYTES_LEN {
                    tracing::warn!(
                        "Rejecting BYTES length prefix {} beyond maximum {}",
                        len,
                        MAX_BYTES_LEN
                    );
                    return Err(ErrorKind::Malformed(MalformedKind::BytesLength(len)));
                }
                let raw = cursor.get_slice(len)?;
                Ok(Value::Bytes(raw))
            }
        }
    }

    /// Builds an integer value of this type from a wide integer, rejecting
    /// input outside the type's numeric range.
    ///
    /// Schema layers keep tunables as wide integers and narrow them when a
    /// message is assembled; the narrowing is explicit and checked here,
    /// never a silent truncation.
    pub fn value_from_int(self, raw: i64) -> Result<Value<'static>> {
        match self {
            WireType::Int8 => {
                i8::try_from(raw).map(Value::Int8).map_err(|_| self.narrow_error(raw))
            }
            WireType::Int16 => {
                i16::try_from(raw).map(Value::Int16).map_err(|_| self.narrow_error(raw))
            }
            WireType::Int32 => {
                i32::try_from(raw).map(Value::Int32).map_err(|_| self.narrow_error(raw))
            }
            WireType::Int64 => Ok(Value::Int64(raw)),
            WireType::String | WireType::Bytes => Err(self.narrow_error(raw)),
        }
    }

    fn narrow_error(self, raw: i64) -> ErrorKind {
        ErrorKind::Validation { value: raw.to_string(), expected: self.expectation() }
    }
}

fn oversize_string(len: usize) -> ErrorKind {
    ErrorKind::Validation {
        value: format!("STRING({} bytes)", len),
        expected: "a string of at most 32767 encoded bytes",
    }
}

fn oversize_bytes(len: usize) -> ErrorKind {
    ErrorKind::Validation {
        value: format!("BYTES({} bytes)", len),
        expected: "a byte sequence of at most 2147483647 bytes",
    }
}
