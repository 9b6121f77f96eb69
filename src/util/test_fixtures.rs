// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::runtime_paths::RuntimePaths;

/// Disposable on-disk runtime root for tests. Each fixture lives under
/// target/test-fixtures and is wiped on creation.
#[derive(Debug)]
pub struct TestFixtureRoot {
    path: PathBuf,
}

impl TestFixtureRoot {
    pub fn new_fixed(name: &str) -> std::io::Result<Self> {
        let root = fixtures_root().join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { path: root })
    }

    pub fn new_unique(prefix: &str) -> std::io::Result<Self> {
        let name = format!("{}-{}", prefix, Uuid::new_v4());
        Self::new_fixed(&name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config_file(&self) -> PathBuf {
        self.path.join("config.yaml")
    }

    pub fn articles_file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn write_snapshot(&self, name: &str, contents: &str) -> std::io::Result<()> {
        fs::write(self.articles_file(name), contents)
    }

    pub fn runtime_paths(&self, articles_file: &str) -> std::io::Result<RuntimePaths> {
        let root = self.path.canonicalize()?;
        Ok(RuntimePaths {
            config_file: root.join("config.yaml"),
            articles_file: root.join(articles_file),
            root,
        })
    }
}

fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("target").join("test-fixtures")
}
