// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};

use crate::api::article_not_found;
use crate::app_state::AppState;
use crate::query;

pub async fn get_tag_date_summary(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (tag_name, date) = path.into_inner();
    log::debug!("tag/date query for '{}' on {}", tag_name, date);

    let articles = state.store.all();
    match query::summarize_tag_date(&articles, &tag_name, &date) {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => article_not_found(),
    }
}
