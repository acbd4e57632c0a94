//! Model configuration - field and column naming conventions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelResult;

/// Names the wrapper uses to find identifier and timestamp fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Registered field holding the primary key
    pub id_field: String,
    /// Column used for the primary key when the field has no override
    pub default_id_column: String,
    pub created_at_field: String,
    pub updated_at_field: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id_field: "ID".to_string(),
            default_id_column: "id".to_string(),
            created_at_field: "CreatedAt".to_string(),
            updated_at_field: "UpdatedAt".to_string(),
        }
    }
}

impl ModelConfig {
    pub fn from_yaml_str(content: &str) -> ModelResult<Self> {
        let config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
