// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::store::Article;

/// Upper bound on the article ids returned by a tag/date summary.
pub const MAX_SUMMARY_ARTICLES: usize = 10;

/// Aggregate result of a tag/date query. `related_tags` is materialized
/// from a map, so its order is unspecified; `articles` holds the most
/// recently entered matches, presented oldest-of-the-selected first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDateSummary {
    pub tag: String,
    pub count: usize,
    pub articles: Vec<String>,
    pub related_tags: Vec<String>,
}

/// Scans `articles` for records published on `date`, aggregates the tags
/// seen alongside `tag_name`, and ranks the matching ids by entry time.
/// Returns None when no article on that date carries the queried tag.
///
/// Entry times that fail to parse as RFC 3339 sort as the epoch; a bad
/// timestamp must not abort the scan.
pub fn summarize_tag_date(
    articles: &[Article],
    tag_name: &str,
    date: &str,
) -> Option<TagDateSummary> {
    let mut found = false;
    let mut related_tags: HashMap<&str, usize> = HashMap::new();
    let mut pending: Vec<(DateTime<Utc>, &str)> = Vec::new();

    for article in articles {
        if article.date != date {
            continue;
        }

        let entry_time = DateTime::parse_from_rfc3339(&article.entry_time)
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_default();
        pending.push((entry_time, article.id.as_str()));

        for tag in &article.tags {
            if tag == tag_name {
                found = true;
            } else {
                *related_tags.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
    }

    if !found {
        return None;
    }

    // Most recent first, keep the top window, then flip it so the
    // selected ids read oldest to newest.
    pending.sort_by(|a, b| b.0.cmp(&a.0));
    pending.truncate(MAX_SUMMARY_ARTICLES);
    pending.reverse();

    Some(TagDateSummary {
        tag: tag_name.to_string(),
        count: related_tags.len() + 1,
        articles: pending.into_iter().map(|(_, id)| id.to_string()).collect(),
        related_tags: related_tags.into_keys().map(str::to_string).collect(),
    })
}
