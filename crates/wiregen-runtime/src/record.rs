//! Encode/decode entry points shared by all generated aggregates

use crate::cache::ConstructorCache;
use crate::error::DecodeResult;
use crate::reader::BinaryReader;
use crate::writer::BinaryWriter;

/// A struct or message with a generated codec.
///
/// Generated code implements the two required methods; the rest are the
/// public entry points built on top of them.
pub trait Record: Sized {
    /// Append this value's wire form to `writer`
    fn encode_into(&self, writer: &mut BinaryWriter);

    /// Read one value from the reader's current position
    fn decode_from(reader: &mut BinaryReader<'_>) -> DecodeResult<Self>;

    /// Encode into a fresh byte buffer
    fn encode(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        self.encode_into(&mut writer);
        writer.into_inner()
    }

    /// Decode a value from the start of `buffer`. Trailing bytes are ignored.
    fn decode(buffer: impl AsRef<[u8]>) -> DecodeResult<Self> {
        let mut reader = BinaryReader::new(buffer.as_ref());
        Self::decode_from(&mut reader)
    }

    /// Decode into a caller-chosen type that embeds this record's data.
    ///
    /// `T` is default-constructed through the global [`ConstructorCache`]
    /// and its record view is overwritten with the decoded fields.
    fn decode_from_as<T>(reader: &mut BinaryReader<'_>) -> DecodeResult<T>
    where
        T: Default + AsMut<Self> + 'static,
    {
        let decoded = Self::decode_from(reader)?;
        let mut instance = ConstructorCache::global().construct::<T>();
        *instance.as_mut() = decoded;
        Ok(instance)
    }

    /// [`decode_from_as`](Self::decode_from_as) over a whole buffer
    fn decode_as<T>(buffer: impl AsRef<[u8]>) -> DecodeResult<T>
    where
        T: Default + AsMut<Self> + 'static,
    {
        let mut reader = BinaryReader::new(buffer.as_ref());
        Self::decode_from_as(&mut reader)
    }
}

#[cfg(test)]
#[path = "record/record_tests.rs"]
mod record_tests;
