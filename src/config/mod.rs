pub mod greeting_config;
pub mod helper;
pub mod queue_config;
pub mod web_ui_config;

use crate::config::greeting_config::GreetingConfig;
use crate::config::queue_config::QueueConfig;
use crate::config::web_ui_config::WebUIConfig;
use crate::theme::{self, Theme};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Main configuration structure matching config.yaml format
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub web_ui: WebUIConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub greeting: GreetingConfig,
    /// Theme shown at startup
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_ui: WebUIConfig::default(),
            queue: QueueConfig::default(),
            greeting: GreetingConfig::default(),
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    theme::DEFAULT_THEME_ID.to_string()
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(content).with_context(|| "Failed to parse YAML config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Use `path` when given, else `config.yaml` if it exists, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.initial_theme()?;
        self.greeting.policy()?;
        Ok(())
    }

    pub fn initial_theme(&self) -> Result<&'static Theme> {
        theme::find_theme(&self.theme).ok_or_else(|| {
            anyhow!(
                "Unknown theme '{}' (expected one of: {})",
                self.theme,
                theme::THEMES
                    .iter()
                    .map(|t| t.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}
