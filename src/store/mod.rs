// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// A single article record. Immutable once it enters the store; the
/// store never rejects duplicates, so `id` uniqueness is the caller's
/// problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Publishing date, compared for exact string equality only.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub body: String,
    /// RFC 3339 timestamp of when the record was entered. Parsed only
    /// for ranking, never for filtering.
    #[serde(default)]
    pub entry_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// On-disk snapshot shape: `{"articles": [...]}`. Also the wire shape
/// of the bulk listing endpoint.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ArticleSnapshot {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(err) => write!(f, "snapshot I/O failed: {}", err),
            SnapshotError::Json(err) => write!(f, "snapshot parse failed: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(err) => Some(err),
            SnapshotError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err)
    }
}

pub fn read_snapshot(path: &Path) -> Result<Vec<Article>, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    let snapshot: ArticleSnapshot = serde_json::from_str(&raw)?;
    Ok(snapshot.articles)
}

/// Append-only article collection. Reads hand out a cloned snapshot so
/// no lock is held while callers scan or sort.
#[derive(Debug, Default)]
pub struct ArticleStore {
    inner: RwLock<Vec<Article>>,
}

impl ArticleStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            inner: RwLock::new(articles),
        }
    }

    pub fn all(&self) -> Vec<Article> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                log::error!("article store lock poisoned on read; recovering");
                poisoned.into_inner().clone()
            }
        }
    }

    pub fn append(&self, article: Article) {
        match self.inner.write() {
            Ok(mut guard) => guard.push(article),
            Err(poisoned) => {
                log::error!("article store lock poisoned on write; recovering");
                poisoned.into_inner().push(article);
            }
        }
    }

    /// First article in store order whose id matches, or None. Duplicate
    /// ids resolve to the earliest entry.
    pub fn find_by_id(&self, id: &str) -> Option<Article> {
        match self.inner.read() {
            Ok(guard) => guard.iter().find(|article| article.id == id).cloned(),
            Err(poisoned) => {
                log::error!("article store lock poisoned on read; recovering");
                poisoned
                    .into_inner()
                    .iter()
                    .find(|article| article.id == id)
                    .cloned()
            }
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
