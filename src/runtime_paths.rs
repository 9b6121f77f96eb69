// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{ConfigError, ValidatedConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical locations of everything the server touches on disk,
/// resolved once at startup under the runtime root.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub articles_file: PathBuf,
}

impl RuntimePaths {
    pub fn from_root(root: &Path, config: &ValidatedConfig) -> Result<Self, ConfigError> {
        let root_path = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };

        if !root_path.exists() {
            fs::create_dir_all(&root_path).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "Failed to create runtime root '{}': {}",
                    root_path.display(),
                    e
                ))
            })?;
        }

        let root_canonical = root_path.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize runtime root '{}': {}",
                root_path.display(),
                e
            ))
        })?;

        let config_file = root_canonical.join("config.yaml");
        ensure_file_readable(&config_file, "Config file must be readable")?;

        let articles_file = root_canonical.join(&config.store.articles_file);
        ensure_file_readable(&articles_file, "Articles snapshot must be readable")?;

        Ok(Self {
            root: root_canonical,
            config_file,
            articles_file,
        })
    }
}

fn ensure_file_readable(path: &Path, context: &str) -> Result<(), ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ValidationError(format!(
            "{} (not a file): {}",
            context,
            path.display()
        )));
    }

    fs::File::open(path).map(|_| ()).map_err(|err| {
        ConfigError::ValidationError(format!("{} ({}): {}", context, path.display(), err))
    })
}
