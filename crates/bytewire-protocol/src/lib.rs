#![warn(missing_docs)]

//! bytewire-protocol: the primitive wire-type catalog.
//!
//! Schema composition layers describe a message as a sequence of
//! (wire type, value) fields; this crate owns the fixed catalog of
//! primitive wire types and the encode/decode/size/validate contract each
//! of them satisfies over the cursors from `bytewire-core`.

/// Tagged values exchanged with the catalog.
pub mod value;
/// The wire-type catalog and its four-operation contract.
pub mod wire_type;

pub use value::Value;
pub use wire_type::WireType;
