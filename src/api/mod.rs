// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};
use serde::Serialize;

pub mod articles;
pub mod tags;

#[derive(Serialize)]
struct ApiMessage {
    message: String,
}

pub(crate) fn article_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiMessage {
        message: "article not found".to_string(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // /articles/all must register before /articles/{id} so "all" is not
    // swallowed by the id segment.
    cfg.route("/articles/all", web::get().to(articles::list_articles))
        .route("/articles/{id}", web::get().to(articles::get_article_by_id))
        .route("/articles", web::post().to(articles::create_article))
        .route(
            "/tags/{tag_name}/{date}",
            web::get().to(tags::get_tag_date_summary),
        );
}
