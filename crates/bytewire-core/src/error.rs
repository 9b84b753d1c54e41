//! Error types for the wire codec.

use thiserror::Error;

/// Convenience alias for codec results.
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Errors raised while validating, sizing, encoding, or decoding wire
/// values.
///
/// The three families are deliberately distinct: a `Validation` failure
/// means the caller handed over a value outside the type's domain, the
/// buffer variants mean the cursor ran out of room, and `Malformed` means
/// the received bytes themselves are not a valid instance. Callers that
/// retry or report treat these very differently, so they are never folded
/// into one another.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was outside the domain of the wire type handling it.
    #[error("{value} is not {expected}")]
    Validation {
        /// Rendering of the offending value.
        value: String,
        /// Description of the domain the wire type accepts.
        expected: &'static str,
    },
    /// A read would pass the end of the readable region.
    #[error("buffer underflow: needed {needed} bytes, {remaining} remaining")]
    BufferUnderflow {
        /// Bytes the operation required.
        needed: usize,
        /// Bytes left before the limit.
        remaining: usize,
    },
    /// A write would pass the end of the buffer.
    #[error("buffer overflow: needed {needed} bytes, {remaining} remaining")]
    BufferOverflow {
        /// Bytes the operation required.
        needed: usize,
        /// Capacity left in the buffer.
        remaining: usize,
    },
    /// Received bytes do not form a valid value of the expected type.
    #[error("malformed encoding: {0}")]
    Malformed(MalformedKind),
}

/// The specific way a decode found its input malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// A STRING payload was not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(std::str::Utf8Error),
    /// A STRING length prefix exceeded the writable maximum.
    #[error("string length {0} exceeds maximum")]
    StringLength(usize),
    /// A BYTES length prefix exceeded the writable maximum.
    #[error("bytes length {0} exceeds maximum")]
    BytesLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_value_and_domain() {
        let err = ErrorKind::Validation {
            value: "INT64(200)".to_string(),
            expected: "an 8-bit integer",
        };
        assert_eq!(err.to_string(), "INT64(200) is not an 8-bit integer");
    }

    #[test]
    fn test_underflow_message_reports_counts() {
        let err = ErrorKind::BufferUnderflow { needed: 8, remaining: 5 };
        assert_eq!(err.to_string(), "buffer underflow: needed 8 bytes, 5 remaining");
    }

    #[test]
    fn test_malformed_message_names_kind() {
        let err = ErrorKind::Malformed(MalformedKind::StringLength(40000));
        assert_eq!(err.to_string(), "malformed encoding: string length 40000 exceeds maximum");
    }
}
