// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
        }
    }
}

fn default_app_name() -> String {
    "Newswire".to_string()
}

fn default_app_description() -> String {
    "A lightweight article wire service".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    4
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// File name of the startup snapshot, relative to the runtime root.
    #[serde(default = "default_articles_file")]
    pub articles_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            articles_file: default_articles_file(),
        }
    }
}

fn default_articles_file() -> String {
    "articles.json".to_string()
}

/// Raw deserialized shape of config.yaml. Call `validate` to obtain the
/// configuration the rest of the application runs on.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name must not be empty".to_string(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be nonzero".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be at least 1".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                VALID_LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        let articles_file = self.store.articles_file.trim();
        if articles_file.is_empty() {
            return Err(ConfigError::ValidationError(
                "store.articles_file must not be empty".to_string(),
            ));
        }
        if articles_file.contains('/') || articles_file.contains('\\') {
            return Err(ConfigError::ValidationError(format!(
                "store.articles_file must be a plain file name, got '{}'",
                articles_file
            )));
        }

        Ok(ValidatedConfig {
            app: self.app,
            server: self.server,
            logging: self.logging,
            store: self.store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_validates_with_defaults() {
        let config: Config = serde_yaml::from_str("{}").expect("parse");
        let validated = config.validate().expect("validate");
        assert_eq!(validated.app.name, "Newswire");
        assert_eq!(validated.server.port, 8080);
        assert_eq!(validated.server.workers, 4);
        assert_eq!(validated.logging.level, "info");
        assert_eq!(validated.store.articles_file, "articles.json");
    }

    #[test]
    fn rejects_zero_port() {
        let config: Config = serde_yaml::from_str("server:\n  port: 0\n").expect("parse");
        match config.validate() {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("port")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_workers() {
        let config: Config = serde_yaml::from_str("server:\n  workers: 0\n").expect("parse");
        match config.validate() {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("workers")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config: Config = serde_yaml::from_str("logging:\n  level: \"loud\"\n").expect("parse");
        match config.validate() {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("logging.level")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config: Config = serde_yaml::from_str("logging:\n  level: \"DEBUG\"\n").expect("parse");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_articles_file_with_path_separators() {
        let config: Config =
            serde_yaml::from_str("store:\n  articles_file: \"../articles.json\"\n").expect("parse");
        match config.validate() {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("articles_file")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_yaml() {
        let result = serde_yaml::from_str::<Config>("server: [not a mapping");
        assert!(result.is_err());
    }
}
