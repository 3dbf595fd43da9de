//! Definitions and their fields

use crate::types::{ScalarType, TypeBase};
use serde::{Deserialize, Serialize};

/// The kind of a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Named set of 32-bit unsigned constants
    Enum,
    /// Fixed-order, untagged, non-nullable aggregate
    Struct,
    /// Tagged, length-framed aggregate with optional fields
    Message,
}

impl Kind {
    /// Whether this kind carries encode/decode entry points
    pub fn is_aggregate(self) -> bool {
        matches!(self, Kind::Struct | Kind::Message)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Enum => write!(f, "enum"),
            Kind::Struct => write!(f, "struct"),
            Kind::Message => write!(f, "message"),
        }
    }
}

/// Deprecation marker on a field or enum member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    /// Optional explanation shown in generated docs
    #[serde(default)]
    pub reason: Option<String>,
}

/// A field of a struct or message, or a member of an enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    /// Field type; enum members default to `uint32`
    #[serde(rename = "type", default = "default_member_type")]
    pub ty: TypeBase,

    /// Message tag or enum member value. Unused for struct fields.
    #[serde(rename = "value", default)]
    pub constant_value: u32,

    #[serde(default)]
    pub deprecated: Option<Deprecation>,

    #[serde(default)]
    pub doc: Option<String>,
}

fn default_member_type() -> TypeBase {
    TypeBase::Scalar(ScalarType::UInt32)
}

impl Field {
    /// Create a field with no tag, docs or deprecation
    pub fn new(name: impl Into<String>, ty: TypeBase) -> Self {
        Self {
            name: name.into(),
            ty,
            constant_value: 0,
            deprecated: None,
            doc: None,
        }
    }

    /// Create a message field with the given tag
    pub fn tagged(name: impl Into<String>, ty: TypeBase, tag: u32) -> Self {
        Self::new(name, ty).with_value(tag)
    }

    /// Create an enum member with the given constant
    pub fn member(name: impl Into<String>, value: u32) -> Self {
        Self::new(name, default_member_type()).with_value(value)
    }

    /// Set the tag or member value
    pub fn with_value(mut self, value: u32) -> Self {
        self.constant_value = value;
        self
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecated = Some(Deprecation {
            reason: reason.map(str::to_string),
        });
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// One named enum, struct or message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub name: String,

    pub kind: Kind,

    /// Declaration order drives struct wire order and generated field order
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub doc: Option<String>,

    /// Identifies the definition at a higher protocol layer; the codec ignores it
    #[serde(default)]
    pub opcode: Option<u32>,

    /// Aggregates only: generate read-only accessors instead of public fields
    #[serde(default)]
    pub readonly: bool,
}

impl Definition {
    /// Create an empty definition
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            doc: None,
            opcode: None,
            readonly: false,
        }
    }

    /// Append a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_opcode(mut self, opcode: u32) -> Self {
        self.opcode = Some(opcode);
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Find a field by its message tag
    pub fn field_by_tag(&self, tag: u32) -> Option<&Field> {
        self.fields.iter().find(|f| f.constant_value == tag)
    }
}
