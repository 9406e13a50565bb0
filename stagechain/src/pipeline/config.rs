//! Pipeline configuration.

use crate::stages::DEFAULT_METHOD;
use serde::{Deserialize, Serialize};

/// Settings shared by every run of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Method called on object and identifier stages.
    pub method: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the method name.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Parses a configuration from JSON, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
