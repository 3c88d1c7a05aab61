//! Schema model trait and field tables
//!
//! A model declares its fields statically instead of relying on runtime
//! attribute lookup. The decoder walks the table, checks each value and
//! hands the result to [`Model::from_fields`].

use crate::config::DecodeConfig;
use crate::error::Result;
use crate::util::{deserialize_model, Fields};
use crate::Mapping;

/// Expected shape of a field value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string (or a scalar, when coercion is enabled)
    String,
    /// A nested mapping decoded as another model
    Object,
}

impl FieldKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Object => "object",
        }
    }
}

/// One entry of a model's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Attribute name on the Rust side
    pub name: &'static str,
    /// Key in the wire mapping
    pub key: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn string(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            kind: FieldKind::String,
        }
    }

    pub const fn object(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            kind: FieldKind::Object,
        }
    }
}

/// A schema model that can be built from an untyped mapping.
pub trait Model: Sized {
    /// Schema name, used in errors and logs
    const NAME: &'static str;

    /// Static field table, in decode order
    fn fields() -> &'static [Field];

    /// Build an instance from checked fields
    fn from_fields(fields: Fields) -> Result<Self>;

    /// Render the wire mapping
    fn to_dict(&self) -> Mapping;

    /// Decode with the default policy
    fn from_dict(mapping: &Mapping) -> Result<Self> {
        Self::from_dict_with(mapping, &DecodeConfig::default())
    }

    fn from_dict_with(mapping: &Mapping, config: &DecodeConfig) -> Result<Self> {
        deserialize_model(mapping, config)
    }

    /// Compact JSON rendering of [`Model::to_dict`]
    fn to_str(&self) -> String {
        serde_json::Value::Object(self.to_dict()).to_string()
    }
}
