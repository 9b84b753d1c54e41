//! Integration tests for the bytewire-protocol crate.
//!
//! These tests drive multi-field messages through a single cursor pair the
//! way a schema layer would: validate and size each field, encode into an
//! exactly-sized buffer, then decode in field order.

use bytewire_core::cursor::{ReadCursor, WriteCursor};
use bytewire_core::error::{ErrorKind, MalformedKind};
use bytewire_protocol::{Value, WireType};

fn encode_fields(fields: &[(WireType, Value<'_>)]) -> Vec<u8> {
    let total: usize = fields
        .iter()
        .map(|(wire_type, value)| {
            let validated = wire_type.validate(*value).unwrap();
            wire_type.size_of(validated).unwrap()
        })
        .sum();

    let mut buf = vec![0u8; total];
    let mut cursor = WriteCursor::new(&mut buf);
    for (wire_type, value) in fields {
        wire_type.write(&mut cursor, *value).unwrap();
    }
    assert_eq!(cursor.position(), total);
    buf
}

#[test]
fn test_request_header_round_trip() {
    let fields = [
        (WireType::Int16, Value::Int16(3)),
        (WireType::Int16, Value::Int16(9)),
        (WireType::Int32, Value::Int32(1042)),
        (WireType::String, Value::String("console-client")),
    ];

    let encoded = encode_fields(&fields);
    assert_eq!(encoded.len(), 2 + 2 + 4 + 2 + 14);

    let mut cursor = ReadCursor::new(&encoded);
    for (wire_type, value) in &fields {
        assert_eq!(wire_type.read(&mut cursor).unwrap(), *value);
    }
    assert!(cursor.is_empty());
}

#[test]
fn test_every_variant_on_one_cursor() {
    let blob = [0xDEu8, 0xAD, 0xBE, 0xEF];
    let fields = [
        (WireType::Int8, Value::Int8(-5)),
        (WireType::Int16, Value::Int16(512)),
        (WireType::Int32, Value::Int32(-1)),
        (WireType::Int64, Value::Int64(1 << 40)),
        (WireType::String, Value::String("mixed")),
        (WireType::Bytes, Value::Bytes(&blob)),
    ];

    let encoded = encode_fields(&fields);

    let mut cursor = ReadCursor::new(&encoded);
    for (wire_type, value) in &fields {
        assert_eq!(wire_type.read(&mut cursor).unwrap(), *value);
    }
    assert_eq!(cursor.position(), encoded.len());
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_decoded_views_outlive_the_cursor() {
    let encoded = encode_fields(&[
        (WireType::String, Value::String("topic-a")),
        (WireType::Bytes, Value::Bytes(&[1, 2, 3, 4])),
    ]);

    let (name, payload) = {
        let mut cursor = ReadCursor::new(&encoded);
        let name = WireType::String.read(&mut cursor).unwrap();
        let payload = WireType::Bytes.read(&mut cursor).unwrap();
        (name, payload)
    };

    // The cursor is gone; the views still borrow from `encoded`.
    assert_eq!(name.as_str().unwrap(), "topic-a");
    assert_eq!(payload.as_bytes().unwrap(), &[1, 2, 3, 4]);
    assert_eq!(payload.as_bytes().unwrap().as_ptr(), encoded[13..].as_ptr());
}

#[test]
fn test_truncated_message_reports_underflow() {
    let encoded = encode_fields(&[
        (WireType::Int32, Value::Int32(7)),
        (WireType::Int64, Value::Int64(99)),
    ]);

    let truncated = &encoded[..9];
    let mut cursor = ReadCursor::new(truncated);
    assert_eq!(WireType::Int32.read(&mut cursor).unwrap(), Value::Int32(7));

    let err = WireType::Int64.read(&mut cursor).unwrap_err();
    assert_eq!(err, ErrorKind::BufferUnderflow { needed: 8, remaining: 5 });
}

#[test]
fn test_corrupt_string_prefix_is_malformed() {
    let mut encoded = encode_fields(&[(WireType::String, Value::String("ok"))]);
    // Forge a length prefix of 32768, one beyond the writable range.
    encoded[0] = 0x80;
    encoded[1] = 0x00;

    let mut cursor = ReadCursor::new(&encoded);
    let err = WireType::String.read(&mut cursor).unwrap_err();
    assert_eq!(err, ErrorKind::Malformed(MalformedKind::StringLength(32768)));
}

#[test]
fn test_rejected_field_leaves_partial_message_intact() {
    let mut buf = [0u8; 16];
    let mut cursor = WriteCursor::new(&mut buf);
    WireType::Int32.write(&mut cursor, Value::Int32(11)).unwrap();
    let before = cursor.position();

    let err = WireType::Int64.write(&mut cursor, Value::Int32(11)).unwrap_err();
    assert!(matches!(err, ErrorKind::Validation { .. }));
    assert_eq!(cursor.position(), before);

    // The already-written field is still decodable.
    let mut reader = ReadCursor::new(&buf[..before]);
    assert_eq!(WireType::Int32.read(&mut reader).unwrap(), Value::Int32(11));
}

#[test]
fn test_peek_with_independent_cursor() {
    let encoded = encode_fields(&[
        (WireType::Int8, Value::Int8(1)),
        (WireType::String, Value::String("peeked")),
    ]);

    let mut cursor = ReadCursor::new(&encoded);
    WireType::Int8.read(&mut cursor).unwrap();

    // Look ahead without committing the main cursor.
    let mut lookahead = cursor.slice();
    assert_eq!(WireType::String.read(&mut lookahead).unwrap(), Value::String("peeked"));
    assert_eq!(cursor.remaining(), encoded.len() - 1);

    // The committed read sees the same field.
    assert_eq!(WireType::String.read(&mut cursor).unwrap(), Value::String("peeked"));
    assert!(cursor.is_empty());
}

#[test]
fn test_nested_record_in_bytes_field() {
    let inner = encode_fields(&[
        (WireType::Int16, Value::Int16(2)),
        (WireType::String, Value::String("inner")),
    ]);
    let outer = encode_fields(&[
        (WireType::Int32, Value::Int32(500)),
        (WireType::Bytes, Value::Bytes(&inner)),
    ]);

    let mut cursor = ReadCursor::new(&outer);
    assert_eq!(WireType::Int32.read(&mut cursor).unwrap(), Value::Int32(500));
    let record = WireType::Bytes.read(&mut cursor).unwrap();

    let mut nested = ReadCursor::new(record.as_bytes().unwrap());
    assert_eq!(WireType::Int16.read(&mut nested).unwrap(), Value::Int16(2));
    assert_eq!(WireType::String.read(&mut nested).unwrap(), Value::String("inner"));
    assert!(nested.is_empty());
}
