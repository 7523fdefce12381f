// ABOUTME: Configuration management for the cookie-consent CLI
// ABOUTME: Loads YAML configuration, merges environment overrides, and yields renderer settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fragments::Settings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub settings: Settings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_yaml(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file deserializes to null
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("cookie-consent.yaml"),
            PathBuf::from("cookie-consent.yml"),
            PathBuf::from(".cookie-consent.yaml"),
            PathBuf::from(".cookie-consent.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".cookie-consent").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Return default path (may not exist)
        PathBuf::from("cookie-consent.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup; empty values are ignored
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(gtm_id) = lookup("GTM_ID") {
            self.settings.gtm_id = Some(gtm_id);
        }
        if let Some(dirs) = lookup("COOKIE_CONSENT_TEMPLATE_DIR") {
            // Environment directories take precedence over configured ones
            let mut merged: Vec<PathBuf> = std::env::split_paths(&dirs)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            merged.append(&mut self.settings.template_dirs);
            self.settings.template_dirs = merged;
        }
        if let Some(static_url) = lookup("COOKIE_CONSENT_STATIC_URL") {
            self.settings.static_url = static_url;
        }

        // Logging configuration
        if let Some(level) = lookup("COOKIE_CONSENT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("COOKIE_CONSENT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Put command-line template directories ahead of everything else
    pub fn prepend_template_dirs(&mut self, dirs: Vec<PathBuf>) {
        if dirs.is_empty() {
            return;
        }
        let mut merged = dirs;
        merged.append(&mut self.settings.template_dirs);
        self.settings.template_dirs = merged;
    }
}
