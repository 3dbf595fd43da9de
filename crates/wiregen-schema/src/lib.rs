//! wiregen-schema - Schema data model for the wiregen codec compiler
//!
//! This crate provides:
//! - [`Schema`]: ordered set of named definitions plus an optional namespace
//! - [`Definition`] and [`Field`]: enums, structs and messages with typed fields
//! - [`TypeBase`] and [`ScalarType`]: the closed set of field types
//! - JSON and TOML loaders for schema files
//!
//! The schema is produced once by a front end and treated as read-only by
//! every consumer.

mod definition;
mod error;
mod schema;
mod types;

pub use definition::{Definition, Deprecation, Field, Kind};
pub use error::{SchemaError, SchemaResult};
pub use schema::{DanglingReference, Schema};
pub use types::{ScalarType, TypeBase};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Definition, Deprecation, Field, Kind, ScalarType, Schema, SchemaError, SchemaResult,
        TypeBase,
    };
}
