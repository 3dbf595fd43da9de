//! wiregen-conformance - Generated codecs under test
//!
//! The build script runs the generator over `schemas/` and the output is
//! compiled here, one module per schema namespace:
//! - `showcase`: every scalar, container shape, enum, struct and message form
//! - `profile_v1` / `profile_v2`: the same message before and after adding a
//!   field, for forward-compatibility tests

include!(concat!(env!("OUT_DIR"), "/showcase.rs"));
include!(concat!(env!("OUT_DIR"), "/profile_v1.rs"));
include!(concat!(env!("OUT_DIR"), "/profile_v2.rs"));

pub use wiregen_runtime::{BinaryReader, BinaryWriter, Date, DecodeError, Guid, Record};
