//! wiregen-codegen - Codec generator for wiregen schemas
//!
//! This crate provides:
//! - [`generate`]: turn a [`Schema`](wiregen_schema::Schema) into Rust source
//! - [`TypeMapper`]: schema types to Rust type names and primitive codec calls
//! - Struct, message and container codec generators
//! - [`GeneratorConfig`] controlling runtime path, docs and namespace wrapping
//!
//! The emitted code depends only on `wiregen-runtime`.
//!
//! # Example
//!
//! ```
//! use wiregen_codegen::{GeneratorConfig, generate};
//! use wiregen_schema::Schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "definitions": [
//!         { "name": "Point", "kind": "struct", "fields": [
//!             { "name": "x", "type": "int32" },
//!             { "name": "y", "type": "int32" }
//!         ]}
//!     ]
//! }"#).unwrap();
//!
//! let code = generate(&schema, &GeneratorConfig::default()).unwrap();
//! assert!(code.contains("pub struct Point"));
//! ```

mod config;
pub mod container;
mod emitter;
mod error;
pub mod message_codec;
pub mod naming;
pub mod source;
pub mod struct_codec;
mod type_mapper;

pub use config::GeneratorConfig;
pub use emitter::{emit_definition, generate, generate_definition};
pub use error::{GenError, GenResult};
pub use type_mapper::{TypeMapper, read_method, write_method, writes_by_reference};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{GenError, GenResult, GeneratorConfig, TypeMapper, generate};
}
