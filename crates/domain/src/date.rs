//! Date schema model

use flexschema_core::{Field, Fields, Mapping, Model, ModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Calendar date carried as a string under the `date32` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateType {
    date32: String,
}

impl DateType {
    pub fn new(date32: impl Into<String>) -> Self {
        Self {
            date32: date32.into(),
        }
    }

    pub fn date32(&self) -> &str {
        &self.date32
    }

    pub fn set_date32<S: Into<String>>(&mut self, value: Option<S>) -> Result<()> {
        let value = value.ok_or(ModelError::InvalidArgument { field: "date32" })?;
        self.date32 = value.into();
        Ok(())
    }

    pub fn into_inner(self) -> String {
        self.date32
    }
}

impl Model for DateType {
    const NAME: &'static str = "DateType";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[Field::string("date32", "date32")];
        FIELDS
    }

    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self::new(fields.take_string("date32")?))
    }

    fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("date32".to_string(), Value::String(self.date32.clone()));
        map
    }
}
