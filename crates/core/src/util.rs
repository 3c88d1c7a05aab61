//! Mapping decoder shared by all schema models.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DecodeConfig;
use crate::error::{ModelError, Result};
use crate::model::{Field, FieldKind, Model};
use crate::Mapping;

/// Checked field values handed to [`Model::from_fields`].
///
/// Every value has passed the presence, null and shape checks for its
/// table entry. String fields hold a `Value::String`, object fields a
/// `Value::Object`.
#[derive(Debug, Clone)]
pub struct Fields {
    model: &'static str,
    config: DecodeConfig,
    values: BTreeMap<&'static str, Value>,
}

impl Fields {
    pub fn new(model: &'static str, config: DecodeConfig) -> Self {
        Self {
            model,
            config,
            values: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: &'static str, value: Value) {
        self.values.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take a string field by attribute name.
    pub fn take_string(&mut self, name: &'static str) -> Result<String> {
        match self.values.remove(name) {
            Some(Value::String(s)) => Ok(s),
            Some(Value::Null) => Err(ModelError::InvalidArgument { field: name }),
            Some(other) => Err(ModelError::InvalidType {
                field: name,
                expected: FieldKind::String.describe(),
                found: kind_of(&other),
            }),
            None => Err(ModelError::MissingField {
                model: self.model,
                field: name,
            }),
        }
    }

    /// Take a nested model field, decoding it with the same policy.
    pub fn take_model<N: Model>(&mut self, name: &'static str) -> Result<N> {
        match self.values.remove(name) {
            Some(Value::Object(map)) => deserialize_model(&map, &self.config),
            Some(Value::Null) => Err(ModelError::InvalidArgument { field: name }),
            Some(other) => Err(ModelError::InvalidType {
                field: name,
                expected: FieldKind::Object.describe(),
                found: kind_of(&other),
            }),
            None => Err(ModelError::MissingField {
                model: self.model,
                field: name,
            }),
        }
    }
}

/// Decode `mapping` into `M` by walking its field table.
pub fn deserialize_model<M: Model>(mapping: &Mapping, config: &DecodeConfig) -> Result<M> {
    let table = M::fields();

    if config.reject_unknown_keys {
        if let Some(key) = mapping
            .keys()
            .find(|key| !table.iter().any(|f| f.key == key.as_str()))
        {
            warn!(model = M::NAME, key = %key, "rejecting unknown key");
            return Err(ModelError::UnknownField {
                model: M::NAME,
                field: key.clone(),
            });
        }
    }

    let mut fields = Fields::new(M::NAME, config.clone());
    for field in table {
        let value = match mapping.get(field.key) {
            Some(value) => value,
            None => {
                warn!(model = M::NAME, field = field.name, "missing required field");
                return Err(ModelError::MissingField {
                    model: M::NAME,
                    field: field.name,
                });
            }
        };
        fields.insert(field.name, check_value(field, value, config)?);
    }

    debug!(model = M::NAME, fields = fields.len(), "decoded mapping");
    M::from_fields(fields)
}

/// Decode an arbitrary JSON value, which must be a mapping.
pub fn deserialize_value<M: Model>(value: &Value, config: &DecodeConfig) -> Result<M> {
    match value {
        Value::Object(map) => deserialize_model(map, config),
        _ => Err(ModelError::NotAnObject { model: M::NAME }),
    }
}

fn check_value(field: &Field, value: &Value, config: &DecodeConfig) -> Result<Value> {
    match (field.kind, value) {
        (_, Value::Null) => Err(ModelError::InvalidArgument { field: field.name }),
        (FieldKind::String, Value::String(_)) => Ok(value.clone()),
        (FieldKind::String, Value::Number(n)) if config.coerce_scalars => {
            Ok(Value::String(n.to_string()))
        }
        (FieldKind::String, Value::Bool(b)) if config.coerce_scalars => {
            Ok(Value::String(b.to_string()))
        }
        (FieldKind::Object, Value::Object(_)) => Ok(value.clone()),
        (kind, other) => Err(ModelError::InvalidType {
            field: field.name,
            expected: kind.describe(),
            found: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
