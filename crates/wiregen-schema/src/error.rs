//! Error types for schema loading

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while reading a schema file or parsing a type expression
#[derive(Error, Debug)]
pub enum SchemaError {
    /// I/O error reading a schema file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML syntax or shape error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Schema file extension is neither `.json` nor `.toml`
    #[error("unsupported schema format: {0}")]
    UnsupportedFormat(String),

    /// Malformed type expression such as `map[int32` or `[]`
    #[error("invalid type expression `{expr}`: {reason}")]
    InvalidType { expr: String, reason: String },

    /// Two definitions share a name
    #[error("duplicate definition: {0}")]
    DuplicateDefinition(String),
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn SchemaError___invalid_type___displays_expression_and_reason() {
        let err = SchemaError::InvalidType {
            expr: "map[int32".to_string(),
            reason: "missing `]`".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid type expression `map[int32`: missing `]`"
        );
    }

    #[test]
    fn SchemaError___duplicate_definition___displays_name() {
        let err = SchemaError::DuplicateDefinition("Point".to_string());

        assert_eq!(err.to_string(), "duplicate definition: Point");
    }

    #[test]
    fn SchemaError___from_io_error___converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");

        let err: SchemaError = io_err.into();

        assert!(matches!(err, SchemaError::Io(_)));
    }
}
