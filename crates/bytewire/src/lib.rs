#![warn(missing_docs)]

//! Bytewire: a small public API facade for the workspace.
//!
//! This crate provides a clean, stable surface that re-exports
//! the most commonly used types for encoding and decoding protocol fields:
//!
//! - The type catalog and its values (`WireType`, `Value`)
//! - Cursors over caller-owned buffers (`ReadCursor`, `WriteCursor`)
//! - Errors (`ErrorKind`, `MalformedKind`)
//!
//! Example
//! ```
//! use bytewire::{ReadCursor, Value, WireType, WriteCursor};
//!
//! let mut buf = [0u8; 8];
//! let mut writer = WriteCursor::new(&mut buf);
//! WireType::String.write(&mut writer, Value::String("ok")).unwrap();
//! assert_eq!(writer.written(), &[0x00, 0x02, 0x6F, 0x6B]);
//!
//! let mut reader = ReadCursor::new(&buf[..4]);
//! assert_eq!(WireType::String.read(&mut reader).unwrap(), Value::String("ok"));
//! ```

// Core: cursors, errors, wire-format constants
pub use bytewire_core::constants;
pub use bytewire_core::cursor::{ReadCursor, WriteCursor};
pub use bytewire_core::error::{ErrorKind, MalformedKind, Result};
// Protocol: the type catalog and tagged values
pub use bytewire_protocol::{Value, WireType};

/// Convenience prelude with the most commonly used items.
pub mod prelude {
    pub use crate::{ErrorKind, MalformedKind, ReadCursor, Result, Value, WireType, WriteCursor};
}
