//! Timestamp schema model

use flexschema_core::{Field, Fields, Mapping, Model, ModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Point-in-time value carried as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeStampType {
    timestamp: String,
}

impl TimeStampType {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn set_timestamp<S: Into<String>>(&mut self, value: Option<S>) -> Result<()> {
        let value = value.ok_or(ModelError::InvalidArgument { field: "timestamp" })?;
        self.timestamp = value.into();
        Ok(())
    }

    pub fn into_inner(self) -> String {
        self.timestamp
    }
}

impl Model for TimeStampType {
    const NAME: &'static str = "TimeStampType";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[Field::string("timestamp", "timestamp")];
        FIELDS
    }

    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self::new(fields.take_string("timestamp")?))
    }

    fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("timestamp".to_string(), Value::String(self.timestamp.clone()));
        map
    }
}
