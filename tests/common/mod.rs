// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use newswire::api;
use newswire::app_state::AppState;
use newswire::store::Article;
use newswire::util::test_fixtures::TestFixtureRoot;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub app_state: web::Data<AppState>,
}

impl TestHarness {
    pub fn new(articles: Vec<Article>) -> Self {
        let fixture = TestFixtureRoot::new_unique("api-test-suite").expect("fixture root");
        let runtime_paths = fixture
            .runtime_paths("articles.json")
            .expect("runtime paths");
        let app_state = web::Data::new(AppState::new(articles, runtime_paths));
        Self { fixture, app_state }
    }
}

pub fn build_test_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).configure(api::configure)
}

pub fn article(id: &str, date: &str, entry_time: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title {}", id),
        date: date.to_string(),
        body: format!("Body {}", id),
        entry_time: entry_time.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
