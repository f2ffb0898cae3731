use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_OPTIONS;
use crate::error::Result;
use crate::selection::DEFAULT_SELECTED;

/// Environment variable hosts read to locate a config file
pub const CONFIG_ENV: &str = "MULTISELECT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSelectConfig {
    /// Catalog, in display order
    pub options: Vec<String>,
    /// Initially selected options
    pub selected: Vec<String>,
    pub placeholder_text: String,
    /// Label shown above the control
    pub placeholder_label: String,
    pub helper_text: String,
    pub show_placeholder: bool,
    pub input_value: String,
    pub locked: bool,
    pub success: bool,
    /// Start with the option list open
    pub open: bool,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            selected: DEFAULT_SELECTED.iter().map(|s| s.to_string()).collect(),
            placeholder_text: "Placeholder".to_string(),
            placeholder_label: "Select values".to_string(),
            helper_text: "Help or instruction text goes here".to_string(),
            show_placeholder: false,
            input_value: String::new(),
            locked: false,
            success: false,
            open: false,
        }
    }
}

impl MultiSelectConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise from `$MULTISELECT_CONFIG`, otherwise defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var(CONFIG_ENV) {
            Ok(env_path) if !env_path.is_empty() => Self::load(env_path),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
