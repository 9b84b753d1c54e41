#![warn(missing_docs)]

//! bytewire-core: foundational types for the wire codec.
//!
//! This crate provides the minimal set of building blocks shared across the
//! codec layers:
//! - Position-tracked byte cursors
//! - Error handling
//! - Wire-format constants
//!
//! The primitive type catalog itself lives in `bytewire-protocol`; this
//! crate knows nothing about individual wire types.

/// Wire-format constants shared across layers.
pub mod constants {
    /// Encoded width of an INT8 value.
    pub const INT8_WIDTH: usize = 1;
    /// Encoded width of an INT16 value.
    pub const INT16_WIDTH: usize = 2;
    /// Encoded width of an INT32 value.
    pub const INT32_WIDTH: usize = 4;
    /// Encoded width of an INT64 value.
    pub const INT64_WIDTH: usize = 8;
    /// Width of the STRING length prefix.
    pub const STRING_PREFIX_WIDTH: usize = 2;
    /// Width of the BYTES length prefix.
    pub const BYTES_PREFIX_WIDTH: usize = 4;
    /// Longest UTF-8 payload a STRING may carry, in bytes.
    ///
    /// The 16-bit length prefix stays within signed range so that readers
    /// which interpret it as an i16 see the same value.
    pub const MAX_STRING_LEN: usize = i16::MAX as usize;
    /// Longest payload a BYTES value may carry, in bytes.
    ///
    /// Same signed-range rule as [`MAX_STRING_LEN`], at 32-bit width.
    pub const MAX_BYTES_LEN: usize = i32::MAX as usize;
}

/// Position-tracked cursors over borrowed byte buffers.
pub mod cursor;
/// Error types and results.
pub mod error;
