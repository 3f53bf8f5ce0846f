//! HTTP-level integration tests for `/books/filter`.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, build_test_app, create_book, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn seed_catalog(app: &axum::Router, token: &str) -> (i32, i32, i32) {
    let a = create_book(app, token, "Rust in Action", "2020", "Kamil Nowak", "UMCS").await;
    let b = create_book(app, token, "Systems Thinking", "2020", "Anna Lis", "POLLUB").await;
    let c = create_book(app, token, "Action Stations", "1999", "Kamil Bator", "UP").await;
    (a, b, c)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_without_params_returns_everything(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(&app).await;
    seed_catalog(&app, &token).await;

    let response = get_auth(&app, "/api/v1/books/filter", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(response).await;
    assert_eq!(books.as_array().map(Vec::len), Some(3));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_combines_criteria_with_and(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(&app).await;
    let (a, _, c) = seed_catalog(&app, &token).await;

    // Substring matches on title and author are combined, not alternated.
    let response = get_auth(
        &app,
        "/api/v1/books/filter?title=Action&author=Kamil",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(response).await;
    let ids: Vec<i64> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![i64::from(a), i64::from(c)]);

    // Narrowing by year must drop the 1999 title.
    let response = get_auth(
        &app,
        "/api/v1/books/filter?title=Action&author=Kamil&year=2020",
        &token,
    )
    .await;
    let books = body_json(response).await;
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], i64::from(a));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_by_rating_excludes_unrated_books(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(&app).await;
    let (a, b, _) = seed_catalog(&app, &token).await;

    let response = post_json_auth(
        &app,
        "/api/v1/books/rating",
        json!({ "ratings": [{ "id": a, "score": 5 }, { "id": b, "score": 3 }] }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(&app, "/api/v1/books/filter?rating=5", &token).await;
    let books = body_json(response).await;
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 1, "only books with a matching rating qualify");
    assert_eq!(books[0]["id"], i64::from(a));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_with_no_matches_returns_empty_array(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(&app).await;
    seed_catalog(&app, &token).await;

    let response = get_auth(&app, "/api/v1/books/filter?title=Nonexistent", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(response).await;
    assert_eq!(books, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_rejects_malformed_params_with_message_list(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(&app).await;

    let response = get_auth(&app, "/api/v1/books/filter?year=18xx&rating=9", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({ "messages": ["Invalid year", "Rating must be in range 1-5"] })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_rejects_out_of_range_rating_alone(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(&app).await;

    let response = get_auth(&app, "/api/v1/books/filter?rating=0", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json, json!({ "messages": ["Rating must be in range 1-5"] }));
}
