// This file is part of the product Newswire.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use newswire::store::Article;
use serde_json::Value;

#[actix_web::test]
async fn insert_then_lookup_returns_the_inserted_article() {
    let harness = common::TestHarness::new(Vec::new());
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let posted = common::article("a1", "2021-01-01", "2021-01-01T10:00:00Z", &["go", "web"]);
    let req = test::TestRequest::post()
        .uri("/articles")
        .set_json(&posted)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let echoed: Article = test::read_body_json(resp).await;
    assert_eq!(echoed, posted);

    let req = test::TestRequest::get().uri("/articles/a1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Article = test::read_body_json(resp).await;
    assert_eq!(fetched, posted);
}

#[actix_web::test]
async fn lookup_unknown_id_is_not_found() {
    let harness = common::TestHarness::new(vec![common::article(
        "a1",
        "2021-01-01",
        "2021-01-01T10:00:00Z",
        &["go"],
    )]);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get().uri("/articles/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(
        json.get("message").and_then(Value::as_str),
        Some("article not found")
    );
}

#[actix_web::test]
async fn duplicate_ids_resolve_to_the_first_stored_article() {
    let mut first = common::article("dup", "2021-01-01", "2021-01-01T10:00:00Z", &[]);
    first.title = "first".to_string();
    let mut second = common::article("dup", "2021-01-02", "2021-01-02T10:00:00Z", &[]);
    second.title = "second".to_string();

    let harness = common::TestHarness::new(vec![first, second]);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get().uri("/articles/dup").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Article = test::read_body_json(resp).await;
    assert_eq!(fetched.title, "first");
}

#[actix_web::test]
async fn list_all_returns_the_snapshot_shape_in_store_order() {
    let harness = common::TestHarness::new(vec![
        common::article("a1", "2021-01-01", "2021-01-01T10:00:00Z", &["go"]),
        common::article("a2", "2021-01-02", "2021-01-02T10:00:00Z", &["web"]),
    ]);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get().uri("/articles/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    let articles = json
        .get("articles")
        .and_then(Value::as_array)
        .expect("articles array");
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].get("id").and_then(Value::as_str), Some("a1"));
    assert_eq!(articles[1].get("id").and_then(Value::as_str), Some("a2"));
    assert!(articles[0].get("entryTime").is_some());
}

#[actix_web::test]
async fn inserted_articles_appear_in_the_listing() {
    let harness = common::TestHarness::new(vec![common::article(
        "a1",
        "2021-01-01",
        "2021-01-01T10:00:00Z",
        &["go"],
    )]);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let posted = common::article("a2", "2021-01-02", "2021-01-02T10:00:00Z", &["web"]);
    let req = test::TestRequest::post()
        .uri("/articles")
        .set_json(&posted)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/articles/all").to_request();
    let resp = test::call_service(&app, req).await;
    let json: Value = test::read_body_json(resp).await;
    let articles = json
        .get("articles")
        .and_then(Value::as_array)
        .expect("articles array");
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1].get("id").and_then(Value::as_str), Some("a2"));
}
