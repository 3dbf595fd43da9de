//! wiregen-runtime - Primitive codec for wiregen-generated code
//!
//! This crate provides:
//! - [`BinaryWriter`] and [`BinaryReader`] for the little-endian wire format
//! - [`Record`] trait implemented by every generated struct and message
//! - [`ConstructorCache`] backing the generic `decode_as` entry points
//! - [`Guid`] and [`Date`] scalar types
//!
//! # Wire Format
//!
//! ```text
//! struct   : field*                              (declaration order, no header)
//! message  : [u32 length] ([u8 tag] value)* [u8 0]
//! array    : [u32 count] value*
//! map      : [u32 count] (key value)*
//! enum     : [u32 value]
//! string   : [u32 byte length] utf8*
//! ```
//!
//! A message `length` counts every byte after the length field up to and
//! including the terminator.

mod cache;
mod date;
mod error;
mod reader;
mod record;
mod writer;

pub use cache::{ConstructorCache, DEFAULT_CACHE_CAPACITY};
pub use date::Date;
pub use error::{DecodeError, DecodeResult};
pub use reader::BinaryReader;
pub use record::Record;
pub use writer::BinaryWriter;

/// 16-byte identifier, written in GUID mixed-endian byte order
pub use uuid::Uuid as Guid;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BinaryReader, BinaryWriter, Date, DecodeError, DecodeResult, Guid, Record};
}
