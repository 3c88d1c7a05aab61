//! Core plumbing for flexschema models.
//!
//! This crate provides the pieces every generated schema model shares:
//! the error taxonomy, the `Model` trait with its static field table,
//! the mapping decoder, decoder configuration and logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod util;

pub use config::DecodeConfig;
pub use error::{ModelError, Result};
pub use model::{Field, FieldKind, Model};
pub use util::{deserialize_model, deserialize_value, Fields};

/// Untyped key-value mapping consumed by the decoder.
pub type Mapping = serde_json::Map<String, serde_json::Value>;
