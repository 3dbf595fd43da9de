#![allow(non_snake_case)]

use super::*;
use crate::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Default)]
struct Pair {
    left: i32,
    right: i32,
}

impl AsMut<Pair> for Pair {
    fn as_mut(&mut self) -> &mut Pair {
        self
    }
}

impl Record for Pair {
    fn encode_into(&self, writer: &mut BinaryWriter) {
        writer.write_i32(self.left);
        writer.write_i32(self.right);
    }

    fn decode_from(reader: &mut BinaryReader<'_>) -> DecodeResult<Self> {
        let left = reader.read_i32()?;
        let right = reader.read_i32()?;
        Ok(Self { left, right })
    }
}

/// Application type that carries a decoded pair plus its own state
#[derive(Debug)]
struct Labeled {
    pair: Pair,
    label: &'static str,
}

impl Default for Labeled {
    fn default() -> Self {
        Self {
            pair: Pair::default(),
            label: "fresh",
        }
    }
}

impl AsMut<Pair> for Labeled {
    fn as_mut(&mut self) -> &mut Pair {
        &mut self.pair
    }
}

#[test]
fn Record___encode___writes_fields_in_order() {
    let pair = Pair { left: 7, right: -3 };

    let bytes = pair.encode();

    assert_eq!(bytes, vec![0x07, 0, 0, 0, 0xFD, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn Record___decode___reads_from_start_and_ignores_trailing() {
    let bytes = [1, 0, 0, 0, 2, 0, 0, 0, 0xEE];

    let pair = Pair::decode(bytes).unwrap();

    assert_eq!(pair, Pair { left: 1, right: 2 });
}

#[test]
fn Record___decode___short_input_fails() {
    let result = Pair::decode([1, 0, 0, 0]);

    assert!(matches!(result, Err(DecodeError::UnexpectedEof { .. })));
}

#[test]
fn Record___decode_from___consumes_consecutive_records() {
    let mut writer = BinaryWriter::new();
    Pair { left: 1, right: 2 }.encode_into(&mut writer);
    Pair { left: 3, right: 4 }.encode_into(&mut writer);
    let bytes = writer.into_inner();
    let mut reader = BinaryReader::new(&bytes);

    let first = Pair::decode_from(&mut reader).unwrap();
    let second = Pair::decode_from(&mut reader).unwrap();

    assert_eq!(first, Pair { left: 1, right: 2 });
    assert_eq!(second, Pair { left: 3, right: 4 });
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn Record___decode_as___fills_record_view_of_custom_type() {
    let bytes = Pair { left: 10, right: 20 }.encode();

    let labeled = Pair::decode_as::<Labeled>(&bytes).unwrap();

    assert_eq!(labeled.pair, Pair { left: 10, right: 20 });
    assert_eq!(labeled.label, "fresh");
    assert!(ConstructorCache::global().contains::<Labeled>());
}

#[test]
fn Record___decode_as___self_type_matches_decode() {
    let bytes = Pair { left: -1, right: 1 }.encode();

    let via_as = Pair::decode_as::<Pair>(&bytes).unwrap();

    assert_eq!(via_as, Pair::decode(&bytes).unwrap());
}

#[test]
fn Record___decode_from_as___leaves_reader_after_record() {
    let mut bytes = Pair { left: 5, right: 6 }.encode();
    bytes.push(0xAB);
    let mut reader = BinaryReader::new(&bytes);

    let labeled = Pair::decode_from_as::<Labeled>(&mut reader).unwrap();

    assert_eq!(labeled.pair.left, 5);
    assert_eq!(reader.read_byte().unwrap(), 0xAB);
}

#[test]
fn Record___decode_as___error_propagates() {
    let result = Pair::decode_as::<Labeled>([0u8; 3]);

    assert!(result.is_err());
}
