//! Property-based tests for the primitive codec
//!
//! Anything the writer produces must be read back identically by the reader,
//! and the reader must never panic on arbitrary input.

use proptest::prelude::*;
use wiregen_runtime::{BinaryReader, BinaryWriter, Date, Guid};

proptest! {
    /// Property: a mixed sequence of scalars reads back in order
    #[test]
    fn proptest_scalar_sequence_roundtrip(
        a in any::<u8>(),
        b in any::<i16>(),
        c in any::<u32>(),
        d in any::<i64>(),
        e in any::<f64>(),
        f in any::<bool>(),
    ) {
        let mut writer = BinaryWriter::new();
        writer.write_byte(a);
        writer.write_i16(b);
        writer.write_u32(c);
        writer.write_i64(d);
        writer.write_f64(e);
        writer.write_bool(f);
        let bytes = writer.into_inner();

        prop_assert_eq!(bytes.len(), 1 + 2 + 4 + 8 + 8 + 1);

        let mut reader = BinaryReader::new(&bytes);
        prop_assert_eq!(reader.read_byte().unwrap(), a);
        prop_assert_eq!(reader.read_i16().unwrap(), b);
        prop_assert_eq!(reader.read_u32().unwrap(), c);
        prop_assert_eq!(reader.read_i64().unwrap(), d);
        prop_assert_eq!(reader.read_f64().unwrap().to_bits(), e.to_bits());
        prop_assert_eq!(reader.read_bool().unwrap(), f);
        prop_assert_eq!(reader.remaining(), 0);
    }

    /// Property: strings and byte arrays keep their exact contents
    #[test]
    fn proptest_length_prefixed_roundtrip(
        text in ".*",
        blob in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut writer = BinaryWriter::new();
        writer.write_string(&text);
        writer.write_bytes(&blob);
        let bytes = writer.into_inner();

        let mut reader = BinaryReader::new(&bytes);
        prop_assert_eq!(reader.read_string().unwrap(), text);
        prop_assert_eq!(reader.read_bytes().unwrap(), blob);
    }

    /// Property: bulk float writes match the per-element layout
    #[test]
    fn proptest_f32_slice_matches_loop(values in proptest::collection::vec(any::<f32>(), 0..64)) {
        let mut bulk = BinaryWriter::new();
        bulk.write_f32_slice(&values);

        let mut looped = BinaryWriter::new();
        looped.write_length(values.len());
        for value in &values {
            looped.write_f32(*value);
        }

        prop_assert_eq!(bulk.into_inner(), looped.into_inner());
    }

    /// Property: guid and date values survive a round trip
    #[test]
    fn proptest_guid_and_date_roundtrip(raw_guid in any::<u128>(), raw_date in any::<u64>()) {
        let guid = Guid::from_u128(raw_guid);
        let date = Date::from_wire(raw_date);

        let mut writer = BinaryWriter::new();
        writer.write_guid(&guid);
        writer.write_date(date);
        let bytes = writer.into_inner();

        let mut reader = BinaryReader::new(&bytes);
        prop_assert_eq!(reader.read_guid().unwrap(), guid);
        prop_assert_eq!(reader.read_date().unwrap(), date);
    }

    /// Property: a framed body reports the end offset the writer patched in
    #[test]
    fn proptest_message_frame_end(body in proptest::collection::vec(1u8..=255, 0..64)) {
        let mut writer = BinaryWriter::new();
        let position = writer.reserve_length();
        let start = writer.len();
        for byte in &body {
            writer.write_byte(*byte);
        }
        writer.write_byte(0);
        let end = writer.len();
        writer.fill_length(position, end - start);
        let bytes = writer.into_inner();

        let mut reader = BinaryReader::new(&bytes);
        prop_assert_eq!(reader.read_message_end().unwrap(), bytes.len());
    }

    /// Property: the reader never panics on arbitrary bytes
    #[test]
    fn proptest_reader_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut reader = BinaryReader::new(&bytes);
        let _ = reader.read_string();
        let _ = reader.read_bytes();
        if let Ok(end) = reader.read_message_end() {
            let _ = reader.read_message_tag(end);
            let _ = reader.skip_to(end);
        }
        let _ = reader.read_guid();
        let _ = reader.read_f64();
    }
}
