#![allow(non_snake_case)]

use super::*;
use crate::writer::BinaryWriter;
use test_case::test_case;

// ============================================================================
// Fixed-width reads
// ============================================================================

#[test]
fn BinaryReader___read_i32___decodes_little_endian() {
    let bytes = [0x07, 0x00, 0x00, 0x00, 0xFD, 0xFF, 0xFF, 0xFF];
    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(reader.read_i32().unwrap(), 7);
    assert_eq!(reader.read_i32().unwrap(), -3);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn BinaryReader___read_bool___nonzero_is_true() {
    let bytes = [0, 1, 7];
    let mut reader = BinaryReader::new(&bytes);

    assert!(!reader.read_bool().unwrap());
    assert!(reader.read_bool().unwrap());
    assert!(reader.read_bool().unwrap());
}

#[test_case(0 ; "empty input")]
#[test_case(1 ; "one byte")]
#[test_case(3 ; "three bytes")]
fn BinaryReader___read_u32___truncated_input_is_eof(available: usize) {
    let bytes = vec![0xAA; available];
    let mut reader = BinaryReader::new(&bytes);

    let result = reader.read_u32();

    assert_eq!(
        result,
        Err(DecodeError::UnexpectedEof {
            position: 0,
            needed: 4,
            remaining: available,
        })
    );
}

#[test]
fn BinaryReader___read_u32___failed_read_does_not_advance() {
    let bytes = [1, 2];
    let mut reader = BinaryReader::new(&bytes);

    let _ = reader.read_u32();

    assert_eq!(reader.position(), 0);
}

// ============================================================================
// Length-prefixed reads
// ============================================================================

#[test]
fn BinaryReader___read_string___roundtrips_writer_output() {
    let mut writer = BinaryWriter::new();
    writer.write_string("wire ✓");
    let bytes = writer.into_inner();

    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(reader.read_string().unwrap(), "wire ✓");
}

#[test]
fn BinaryReader___read_string___rejects_invalid_utf8() {
    let bytes = [2, 0, 0, 0, 0xC3, 0x28];
    let mut reader = BinaryReader::new(&bytes);

    let result = reader.read_string();

    assert_eq!(result, Err(DecodeError::InvalidUtf8 { position: 4 }));
}

#[test]
fn BinaryReader___read_bytes___declared_length_past_end_is_eof() {
    let bytes = [10, 0, 0, 0, 1, 2, 3];
    let mut reader = BinaryReader::new(&bytes);

    let result = reader.read_bytes();

    assert!(matches!(
        result,
        Err(DecodeError::UnexpectedEof { needed: 10, remaining: 3, .. })
    ));
}

#[test]
fn BinaryReader___read_bytes___zero_length_is_empty() {
    let bytes = [0, 0, 0, 0];
    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(reader.read_bytes().unwrap(), Vec::<u8>::new());
}

#[test]
fn BinaryReader___read_guid___roundtrips_writer_output() {
    let guid = Guid::new_v4();
    let mut writer = BinaryWriter::new();
    writer.write_guid(&guid);
    let bytes = writer.into_inner();

    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(reader.read_guid().unwrap(), guid);
}

#[test]
fn BinaryReader___bounded_capacity___clamps_to_remaining() {
    let bytes = [0u8; 8];
    let reader = BinaryReader::new(&bytes);

    assert_eq!(reader.bounded_capacity(3), 3);
    assert_eq!(reader.bounded_capacity(u32::MAX as usize), 8);
}

#[test]
fn BinaryReader___read_count___accepts_count_that_fits() {
    let bytes = [2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0];
    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(reader.read_count(4).unwrap(), 2);
    assert_eq!(reader.position(), 4);
}

#[test]
fn BinaryReader___read_count___rejects_count_larger_than_input() {
    let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
    let mut reader = BinaryReader::new(&bytes);

    let result = reader.read_count(4);

    assert_eq!(
        result,
        Err(DecodeError::CountExceedsInput {
            position: 0,
            count: u32::MAX as usize,
            needed: (u32::MAX as usize).saturating_mul(4),
            remaining: 4,
        })
    );
}

#[test]
fn BinaryReader___read_count___zero_sized_elements_take_any_count() {
    let bytes = [0xFF, 0xFF, 0xFF, 0xFF];
    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(reader.read_count(0).unwrap(), u32::MAX as usize);
}

// ============================================================================
// Message framing
// ============================================================================

#[test]
fn BinaryReader___read_message_end___returns_absolute_end() {
    let bytes = [6, 0, 0, 0, 1, 42, 0, 0, 0, 0];
    let mut reader = BinaryReader::new(&bytes);

    let end = reader.read_message_end().unwrap();

    assert_eq!(end, 10);
    assert_eq!(reader.position(), 4);
}

#[test]
fn BinaryReader___read_message_end___rejects_length_past_input() {
    let bytes = [50, 0, 0, 0, 0];
    let mut reader = BinaryReader::new(&bytes);

    let result = reader.read_message_end();

    assert_eq!(
        result,
        Err(DecodeError::FrameOutOfBounds {
            end: 54,
            available: 5,
        })
    );
}

#[test]
fn BinaryReader___read_message_tag___at_end_is_missing_terminator() {
    let bytes = [1, 0, 0, 0, 7];
    let mut reader = BinaryReader::new(&bytes);
    let end = reader.read_message_end().unwrap();

    assert_eq!(reader.read_message_tag(end).unwrap(), 7);
    assert_eq!(
        reader.read_message_tag(end),
        Err(DecodeError::MissingTerminator { end: 5 })
    );
}

#[test]
fn BinaryReader___skip_to___moves_to_frame_end() {
    let bytes = [0u8; 16];
    let mut reader = BinaryReader::new(&bytes);

    reader.skip_to(12).unwrap();

    assert_eq!(reader.position(), 12);
    assert_eq!(reader.remaining(), 4);
}

#[test]
fn BinaryReader___seek___past_end_fails() {
    let bytes = [0u8; 4];
    let mut reader = BinaryReader::new(&bytes);

    assert_eq!(
        reader.seek(5),
        Err(DecodeError::SeekOutOfBounds {
            target: 5,
            available: 4,
        })
    );
}
