//! Temporal schema models for flexschema
//!
//! This crate contains the generated-schema value types:
//! - `TemporalValue` (timestamp + date32) and its `TemporalType` wrapper
//! - `TimeStampType` and `DateType`, the single-field parts

pub mod date;
pub mod temporal;
pub mod timestamp;

pub use date::DateType;
pub use flexschema_core::{DecodeConfig, Mapping, Model, ModelError, Result};
pub use temporal::{TemporalType, TemporalValue};
pub use timestamp::TimeStampType;
