// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{Config, ConfigError, ValidatedConfig};
use crate::runtime_paths::RuntimePaths;
use crate::store::{self, Article, SnapshotError};
use std::error::Error;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct BootstrapResult {
    pub validated_config: ValidatedConfig,
    pub runtime_paths: RuntimePaths,
    pub articles: Vec<Article>,
    pub created_config: bool,
    pub created_snapshot: bool,
}

#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Io(std::io::Error),
    Snapshot(SnapshotError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "{}", err),
            BootstrapError::Io(err) => write!(f, "Bootstrap I/O error: {}", err),
            BootstrapError::Snapshot(err) => write!(f, "Article snapshot error: {}", err),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Io(err) => Some(err),
            BootstrapError::Snapshot(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err)
    }
}

impl From<SnapshotError> for BootstrapError {
    fn from(err: SnapshotError) -> Self {
        BootstrapError::Snapshot(err)
    }
}

/// Prepares the runtime root and loads everything the server needs to
/// start: config.yaml (created with defaults on first run), validated
/// configuration, canonical paths, and the article snapshot. Any error
/// here is fatal to startup.
pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    let created_config = ensure_config(root)?;

    let config_path = normalize_root(root)?.join("config.yaml");
    let validated_config = Config::from_file(&config_path)?.validate()?;

    let created_snapshot = ensure_snapshot(root, &validated_config)?;
    let runtime_paths = RuntimePaths::from_root(root, &validated_config)?;
    let articles = store::read_snapshot(&runtime_paths.articles_file)?;

    Ok(BootstrapResult {
        validated_config,
        runtime_paths,
        articles,
        created_config,
        created_snapshot,
    })
}

fn ensure_config(root: &Path) -> Result<bool, BootstrapError> {
    let root_path = normalize_root(root)?;
    let config_path = root_path.join("config.yaml");

    if config_path.exists() {
        return Ok(false);
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(default_config_yaml().as_bytes())?;
    file.sync_all()?;

    log_action("created config.yaml with default settings");

    Ok(true)
}

fn ensure_snapshot(root: &Path, config: &ValidatedConfig) -> Result<bool, BootstrapError> {
    let root_path = normalize_root(root)?;
    let snapshot_path = root_path.join(&config.store.articles_file);

    if snapshot_path.exists() {
        return Ok(false);
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&snapshot_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(b"{\"articles\": []}\n")?;
    file.sync_all()?;

    log_action(format!(
        "created empty article snapshot {}",
        config.store.articles_file
    ));

    Ok(true)
}

fn normalize_root(root: &Path) -> Result<PathBuf, BootstrapError> {
    let root_path = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.to_path_buf()
    };

    if root_path.exists() {
        if !root_path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Runtime root is not a directory: {}", root_path.display()),
            )));
        }
        return Ok(root_path);
    }

    fs::create_dir_all(&root_path)?;
    log_action(format!(
        "created runtime root directory {}",
        root_path.display()
    ));
    Ok(root_path)
}

fn default_config_yaml() -> String {
    "server:\n  host: \"127.0.0.1\"\n  port: 8080\n  workers: 4\n\nlogging:\n  level: \"info\"\n\nstore:\n  articles_file: \"articles.json\"\n\napp:\n  name: \"Newswire\"\n  description: \"A lightweight article wire service\"\n"
        .to_string()
}

pub(crate) fn log_action(message: impl AsRef<str>) {
    eprintln!("[bootstrap] {}", message.as_ref());
}
