// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::runtime_paths::RuntimePaths;
use crate::store::{Article, ArticleStore};

pub struct AppState {
    pub store: ArticleStore,
    pub runtime_paths: RuntimePaths,
}

impl AppState {
    pub fn new(articles: Vec<Article>, runtime_paths: RuntimePaths) -> Self {
        Self {
            store: ArticleStore::new(articles),
            runtime_paths,
        }
    }
}
