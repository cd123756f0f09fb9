//! Declarative dispatcher configuration.
//!
//! Paths and the declared variant set can be loaded from JSON instead of
//! being written in code. Handlers are always registered in code.
//!
//! ```json
//! { "reduce": "payload.shape", "subset": ["kind"], "variants": ["circle", "square"] }
//! ```

use mapis_core::{MapisError, Path};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selector paths and an optional variant set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Path to the substructure holding the selector.
    pub reduce: Path,
    /// Path from that substructure to the selector.
    pub subset: Path,
    /// Every valid selector value, if the set is closed.
    pub variants: Option<Vec<String>>,
}

/// Errors raised while loading a [`DispatchConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not a valid configuration.
    #[error("invalid dispatch configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for MapisError {
    fn from(err: ConfigError) -> Self {
        MapisError::Custom(Box::new(err))
    }
}

impl DispatchConfig {
    /// The combined selector path.
    pub fn path(&self) -> Path {
        self.reduce.join(&self.subset)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a configuration out of an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }
}
