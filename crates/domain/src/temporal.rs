//! Temporal schema models
//!
//! [`TemporalValue`] pairs a timestamp with a date, both carried as
//! strings exactly as they appear on the wire. [`TemporalType`] is the
//! schema wrapper that nests it under the `temporal` key.

use std::fmt;

use flexschema_core::{DecodeConfig, Field, Fields, Mapping, Model, ModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::date::DateType;
use crate::timestamp::TimeStampType;

/// Timestamp and date pair.
///
/// Both fields are always populated. Construction takes owned strings, so
/// the only way to supply a missing value is through [`TemporalValue::try_new`]
/// or the setters, which reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalValue {
    timestamp: String,
    date32: String,
}

impl TemporalValue {
    pub fn new(timestamp: impl Into<String>, date32: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            date32: date32.into(),
        }
    }

    /// Build from possibly-absent values, applying the setter checks.
    pub fn try_new<T, D>(timestamp: Option<T>, date32: Option<D>) -> Result<Self>
    where
        T: Into<String>,
        D: Into<String>,
    {
        let timestamp = timestamp.ok_or(ModelError::InvalidArgument { field: "timestamp" })?;
        let date32 = date32.ok_or(ModelError::InvalidArgument { field: "date32" })?;
        Ok(Self::new(timestamp, date32))
    }

    /// Assemble from the single-field schema models.
    pub fn from_parts(timestamp: TimeStampType, date: DateType) -> Self {
        Self {
            timestamp: timestamp.into_inner(),
            date32: date.into_inner(),
        }
    }

    pub fn into_parts(self) -> (TimeStampType, DateType) {
        (
            TimeStampType::new(self.timestamp),
            DateType::new(self.date32),
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Replace the timestamp. `None` fails and leaves the current value.
    pub fn set_timestamp<S: Into<String>>(&mut self, value: Option<S>) -> Result<()> {
        let value = value.ok_or(ModelError::InvalidArgument { field: "timestamp" })?;
        self.timestamp = value.into();
        Ok(())
    }

    pub fn date32(&self) -> &str {
        &self.date32
    }

    /// Replace the date. `None` fails and leaves the current value.
    pub fn set_date32<S: Into<String>>(&mut self, value: Option<S>) -> Result<()> {
        let value = value.ok_or(ModelError::InvalidArgument { field: "date32" })?;
        self.date32 = value.into();
        Ok(())
    }

    /// Decode from an untyped mapping with the default policy.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        Self::from_dict(mapping)
    }

    pub fn from_mapping_with(mapping: &Mapping, config: &DecodeConfig) -> Result<Self> {
        Self::from_dict_with(mapping, config)
    }

    pub fn to_mapping(&self) -> Mapping {
        self.to_dict()
    }
}

impl Model for TemporalValue {
    const NAME: &'static str = "TemporalValue";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[
            Field::string("timestamp", "timestamp"),
            Field::string("date32", "date32"),
        ];
        FIELDS
    }

    fn from_fields(mut fields: Fields) -> Result<Self> {
        let timestamp = fields.take_string("timestamp")?;
        let date32 = fields.take_string("date32")?;
        Ok(Self::new(timestamp, date32))
    }

    fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("timestamp".to_string(), Value::String(self.timestamp.clone()));
        map.insert("date32".to_string(), Value::String(self.date32.clone()));
        map
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

/// Schema wrapper carrying a [`TemporalValue`] under `temporal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalType {
    temporal: TemporalValue,
}

impl TemporalType {
    pub fn new(temporal: TemporalValue) -> Self {
        Self { temporal }
    }

    pub fn temporal(&self) -> &TemporalValue {
        &self.temporal
    }

    pub fn temporal_mut(&mut self) -> &mut TemporalValue {
        &mut self.temporal
    }

    pub fn set_temporal(&mut self, value: Option<TemporalValue>) -> Result<()> {
        self.temporal = value.ok_or(ModelError::InvalidArgument { field: "temporal" })?;
        Ok(())
    }

    pub fn into_inner(self) -> TemporalValue {
        self.temporal
    }
}

impl Model for TemporalType {
    const NAME: &'static str = "TemporalType";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[Field::object("temporal", "temporal")];
        FIELDS
    }

    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self::new(fields.take_model("temporal")?))
    }

    fn to_dict(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert(
            "temporal".to_string(),
            Value::Object(self.temporal.to_dict()),
        );
        map
    }
}

impl fmt::Display for TemporalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Mapping {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_new_and_accessors() {
        let value = TemporalValue::new("2024-01-01T00:00:00Z", "2024-01-01");
        assert_eq!(value.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(value.date32(), "2024-01-01");
    }

    #[test]
    fn test_accessors_keep_arbitrary_strings() {
        for (t, d) in [("", ""), ("  padded ", "\u{e9}t\u{e9}"), ("19723", "not-a-date")] {
            let value = TemporalValue::new(t, d);
            assert_eq!(value.timestamp(), t);
            assert_eq!(value.date32(), d);
        }
    }

    #[test]
    fn test_setters_store_values() {
        let mut value = TemporalValue::new("a", "b");
        value.set_timestamp(Some("2025-06-30T12:00:00Z")).unwrap();
        value.set_date32(Some(String::from("2025-06-30"))).unwrap();
        assert_eq!(value.timestamp(), "2025-06-30T12:00:00Z");
        assert_eq!(value.date32(), "2025-06-30");
    }

    #[test]
    fn test_setters_reject_none() {
        let mut value = TemporalValue::new("a", "b");

        let err = value.set_timestamp(None::<String>).unwrap_err();
        assert_eq!(err, ModelError::InvalidArgument { field: "timestamp" });
        assert_eq!(value.timestamp(), "a");

        let err = value.set_date32(None::<&str>).unwrap_err();
        assert_eq!(err, ModelError::InvalidArgument { field: "date32" });
        assert_eq!(value.date32(), "b");
    }

    #[test]
    fn test_try_new() {
        let value = TemporalValue::try_new(Some("t"), Some("d")).unwrap();
        assert_eq!(value, TemporalValue::new("t", "d"));

        assert_eq!(
            TemporalValue::try_new(None::<&str>, Some("d")).unwrap_err(),
            ModelError::InvalidArgument { field: "timestamp" }
        );
        assert_eq!(
            TemporalValue::try_new(Some("t"), None::<&str>).unwrap_err(),
            ModelError::InvalidArgument { field: "date32" }
        );
    }

    #[test]
    fn test_from_mapping() {
        let map = mapping(json!({
            "timestamp": "2024-01-01T00:00:00Z",
            "date32": "2024-01-01"
        }));
        let value = TemporalValue::from_mapping(&map).unwrap();
        assert_eq!(value.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(value.date32(), "2024-01-01");
        assert_eq!(value.to_mapping(), map);
    }

    #[test]
    fn test_from_mapping_missing_date32() {
        let map = mapping(json!({"timestamp": "2024-01-01T00:00:00Z"}));
        assert_eq!(
            TemporalValue::from_mapping(&map).unwrap_err(),
            ModelError::MissingField {
                model: "TemporalValue",
                field: "date32"
            }
        );
    }

    #[test]
    fn test_from_mapping_null_value() {
        let map = mapping(json!({"timestamp": null, "date32": "2024-01-01"}));
        assert_eq!(
            TemporalValue::from_mapping(&map).unwrap_err(),
            ModelError::InvalidArgument { field: "timestamp" }
        );
    }

    #[test]
    fn test_from_mapping_coerces_day_count() {
        let map = mapping(json!({"timestamp": 1704067200000_u64, "date32": 19723}));
        let value = TemporalValue::from_mapping(&map).unwrap();
        assert_eq!(value.timestamp(), "1704067200000");
        assert_eq!(value.date32(), "19723");

        let err = TemporalValue::from_mapping_with(&map, &DecodeConfig::strict()).unwrap_err();
        assert!(matches!(err, ModelError::InvalidType { field: "timestamp", .. }));
    }

    #[test]
    fn test_parts() {
        let value = TemporalValue::from_parts(TimeStampType::new("t"), DateType::new("d"));
        assert_eq!(value, TemporalValue::new("t", "d"));

        let (ts, date) = value.into_parts();
        assert_eq!(ts.timestamp(), "t");
        assert_eq!(date.date32(), "d");
    }

    #[test]
    fn test_display() {
        let value = TemporalValue::new("t", "d");
        let rendered: Value = serde_json::from_str(&value.to_string()).unwrap();
        assert_eq!(rendered, json!({"timestamp": "t", "date32": "d"}));
    }

    #[test]
    fn test_serde_matches_mapping() {
        let value = TemporalValue::new("t", "d");
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            Value::Object(value.to_mapping())
        );

        let err = serde_json::from_value::<TemporalValue>(json!({"timestamp": "t"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_temporal_type_nested() {
        let map = mapping(json!({
            "temporal": {"timestamp": "t", "date32": "d"}
        }));
        let wrapped = TemporalType::from_dict(&map).unwrap();
        assert_eq!(wrapped.temporal(), &TemporalValue::new("t", "d"));
        assert_eq!(wrapped.to_dict(), map);
    }

    #[test]
    fn test_temporal_type_nested_errors() {
        let map = mapping(json!({"temporal": {"timestamp": "t"}}));
        assert_eq!(
            TemporalType::from_dict(&map).unwrap_err(),
            ModelError::MissingField {
                model: "TemporalValue",
                field: "date32"
            }
        );

        let map = mapping(json!({"temporal": null}));
        assert_eq!(
            TemporalType::from_dict(&map).unwrap_err(),
            ModelError::InvalidArgument { field: "temporal" }
        );
    }

    #[test]
    fn test_temporal_type_setters() {
        let mut wrapped = TemporalType::new(TemporalValue::new("t", "d"));
        wrapped.temporal_mut().set_date32(Some("d2")).unwrap();
        assert_eq!(wrapped.temporal().date32(), "d2");

        assert!(wrapped.set_temporal(None).is_err());
        wrapped
            .set_temporal(Some(TemporalValue::new("t3", "d3")))
            .unwrap();
        assert_eq!(wrapped.into_inner(), TemporalValue::new("t3", "d3"));
    }
}
