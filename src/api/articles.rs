// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};

use crate::api::article_not_found;
use crate::app_state::AppState;
use crate::store::{Article, ArticleSnapshot};

pub async fn list_articles(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ArticleSnapshot {
        articles: state.store.all(),
    })
}

pub async fn get_article_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    match state.store.find_by_id(&id) {
        Some(article) => HttpResponse::Ok().json(article),
        None => article_not_found(),
    }
}

/// Appends the posted article and echoes it back. No uniqueness check,
/// no field validation; the store accepts what it is given.
pub async fn create_article(
    state: web::Data<AppState>,
    payload: web::Json<Article>,
) -> HttpResponse {
    let article = payload.into_inner();
    log::info!("stored article {}", article.id);
    state.store.append(article.clone());
    HttpResponse::Created().json(article)
}
