//! The schema: an ordered mapping from definition name to definition
//!
//! Schema files list definitions as an array so that declaration order
//! survives both JSON and TOML:
//!
//! ```json
//! {
//!   "namespace": "shapes",
//!   "definitions": [
//!     { "name": "Point", "kind": "struct", "fields": [
//!       { "name": "x", "type": "int32" },
//!       { "name": "y", "type": "int32" }
//!     ]}
//!   ]
//! }
//! ```

use crate::definition::Definition;
use crate::error::{SchemaError, SchemaResult};
use crate::types::TypeBase;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Ordered set of definitions plus an optional namespace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub namespace: Option<String>,
    definitions: IndexMap<String, Definition>,
}

/// On-disk layout of a schema file
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    namespace: Option<String>,

    #[serde(default)]
    definitions: Vec<Definition>,
}

/// A field whose type names a definition the schema does not contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub definition: String,
    pub field: String,
    pub target: String,
}

impl Schema {
    /// Create an empty schema
    pub fn new(namespace: Option<String>) -> Self {
        Self {
            namespace,
            definitions: IndexMap::new(),
        }
    }

    /// Build a schema from definitions in declaration order
    pub fn from_definitions(
        namespace: Option<String>,
        definitions: impl IntoIterator<Item = Definition>,
    ) -> SchemaResult<Self> {
        let mut schema = Self::new(namespace);
        for definition in definitions {
            schema.insert(definition)?;
        }
        Ok(schema)
    }

    /// Append a definition, rejecting duplicate names
    pub fn insert(&mut self, definition: Definition) -> SchemaResult<()> {
        if self.definitions.contains_key(&definition.name) {
            return Err(SchemaError::DuplicateDefinition(definition.name));
        }
        self.definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Parse a schema from JSON text
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        let file: SchemaFile = serde_json::from_str(content)?;
        Self::from_definitions(file.namespace, file.definitions)
    }

    /// Parse a schema from TOML text (`[[definitions]]` tables)
    pub fn from_toml_str(content: &str) -> SchemaResult<Self> {
        let file: SchemaFile = toml::from_str(content)?;
        Self::from_definitions(file.namespace, file.definitions)
    }

    /// Load a schema file, choosing the format from its extension
    pub fn from_path(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(SchemaError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Look up a definition by name
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Resolve a defined-type reference. Returns `None` for scalars and containers.
    pub fn resolve(&self, ty: &TypeBase) -> Option<&Definition> {
        match ty {
            TypeBase::Defined(name) => self.get(name),
            _ => None,
        }
    }

    /// Definitions in declaration order
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Every field type that references a missing definition
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for definition in self.definitions() {
            for field in &definition.fields {
                for target in field.ty.defined_names() {
                    if !self.definitions.contains_key(target) {
                        dangling.push(DanglingReference {
                            definition: definition.name.clone(),
                            field: field.name.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }

        dangling
    }
}
