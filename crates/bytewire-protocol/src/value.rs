//! Tagged values exchanged with the wire-type catalog.

use std::fmt;

use bytewire_core::error::{ErrorKind, Result};

use crate::wire_type::WireType;

/// A protocol value tagged with the representation it inhabits.
///
/// Payloads are statically typed per variant. STRING and BYTES payloads
/// borrow from caller-owned data on the encode side, or from the receive
/// buffer on the decode side, so a `Value` is cheap to copy and never owns
/// an allocation. The tag is only inspected at the schema boundary; inside
/// a catalog operation the payload is reached through the typed accessors,
/// which reject a mismatched tag instead of reinterpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// An 8-bit signed integer.
    Int8(i8),
    /// A 16-bit signed integer.
    Int16(i16),
    /// A 32-bit signed integer.
    Int32(i32),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A UTF-8 string.
    String(&'a str),
    /// An opaque byte sequence.
    Bytes(&'a [u8]),
}

impl<'a> Value<'a> {
    /// Returns the wire type whose domain this value inhabits.
    pub fn wire_type(&self) -> WireType {
        match self {
            Value::Int8(_) => WireType::Int8,
            Value::Int16(_) => WireType::Int16,
            Value::Int32(_) => WireType::Int32,
            Value::Int64(_) => WireType::Int64,
            Value::String(_) => WireType::String,
            Value::Bytes(_) => WireType::Bytes,
        }
    }

    /// Returns the payload if this is an `Int8`.
    pub fn as_i8(&self) -> Result<i8> {
        match self {
            Value::Int8(v) => Ok(*v),
            other => Err(other.domain_error(WireType::Int8)),
        }
    }

    /// Returns the payload if this is an `Int16`.
    pub fn as_i16(&self) -> Result<i16> {
        match self {
            Value::Int16(v) => Ok(*v),
            other => Err(other.domain_error(WireType::Int16)),
        }
    }

    /// Returns the payload if this is an `Int32`.
    pub fn as_i32(&self) -> Result<i32> {
        match self {
            Value::Int32(v) => Ok(*v),
            other => Err(other.domain_error(WireType::Int32)),
        }
    }

    /// Returns the payload if this is an `Int64`.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Int64(v) => Ok(*v),
            other => Err(other.domain_error(WireType::Int64)),
        }
    }

    /// Returns the payload if this is a `String`.
    pub fn as_str(&self) -> Result<&'a str> {
        match self {
            Value::String(s) => Ok(*s),
            other => Err(other.domain_error(WireType::String)),
        }
    }

    /// Returns the payload if this is a `Bytes`.
    pub fn as_bytes(&self) -> Result<&'a [u8]> {
        match self {
            Value::Bytes(b) => Ok(*b),
            other => Err(other.domain_error(WireType::Bytes)),
        }
    }

    fn domain_error(&self, expected: WireType) -> ErrorKind {
        ErrorKind::Validation { value: self.to_string(), expected: expected.expectation() }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int8(v) => write!(f, "INT8({})", v),
            Value::Int16(v) => write!(f, "INT16({})", v),
            Value::Int32(v) => write!(f, "INT32({})", v),
            Value::Int64(v) => write!(f, "INT64({})", v),
            Value::String(s) => write!(f, "STRING({:?})", s),
            Value::Bytes(b) => write!(f, "BYTES({} bytes)", b.len()),
        }
    }
}
