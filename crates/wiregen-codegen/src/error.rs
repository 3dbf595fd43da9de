//! Generation error types

use thiserror::Error;

/// Errors raised while generating codecs.
///
/// These point at a broken schema or front end, not at bad runtime input, and
/// abort generation of the offending definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("unresolved type '{name}'")]
    UnresolvedType { name: String },

    #[error("field '{field}' has tag {tag}; message tags must be within 1..=255")]
    InvalidTag { field: String, tag: u32 },

    #[error("field '{field}' reuses tag {tag}")]
    DuplicateTag { field: String, tag: u32 },

    #[error("enum member '{member}' has type '{ty}'; enum members are uint32")]
    InvalidEnumMember { member: String, ty: String },

    #[error("'{ty}' cannot be used as a map key")]
    UnsupportedMapKey { ty: String },

    #[error("struct field '{field}' of type '{ty}' contains the struct itself by value")]
    SelfNestingStruct { field: String, ty: String },

    #[error("'{first}' and '{second}' both map to the Rust identifier '{ident}'")]
    DuplicateIdentifier {
        ident: String,
        first: String,
        second: String,
    },

    #[error("'{name}' is a {kind}, expected a {expected}")]
    WrongKind {
        name: String,
        kind: String,
        expected: String,
    },

    #[error("definition '{name}' not found")]
    UnknownDefinition { name: String },

    #[error("in definition '{definition}': {source}")]
    Definition {
        definition: String,
        #[source]
        source: Box<GenError>,
    },
}

impl GenError {
    /// Attach the name of the definition being generated
    pub fn in_definition(self, definition: impl Into<String>) -> Self {
        GenError::Definition {
            definition: definition.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, without definition context
    pub fn root(&self) -> &GenError {
        match self {
            GenError::Definition { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for generation operations
pub type GenResult<T> = Result<T, GenError>;
