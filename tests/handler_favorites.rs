mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::{Router, middleware};
use axum_test::TestServer;
use favorites_service::api::middleware::auth;
use favorites_service::api::routes::protected_routes;
use serde_json::{Value, json};
use sqlx::PgPool;

/// API routes behind the real auth middleware, with a valid token.
async fn setup(pool: &PgPool) -> (TestServer, String) {
    let state = common::create_test_state(pool.clone());
    let token = common::create_api_token(pool, "integration").await;

    let app = Router::new()
        .nest(
            "/v1",
            protected_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .with_state(state);

    (TestServer::new(app).unwrap(), token)
}

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        axum::http::header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

async fn seed_pair(pool: &PgPool) -> (i64, i64) {
    let merchandiser_id = common::create_test_merchandiser(pool, "Ana Souza").await;
    let report_id = common::create_test_report(pool, "Weekly shelf audit").await;
    (merchandiser_id, report_id)
}

#[sqlx::test]
async fn test_create_favorite(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, report_id) = seed_pair(&pool).await;
    let (name, value) = bearer(&token);

    let response = server
        .post("/v1/favorites")
        .add_header(name, value)
        .json(&json!({
            "report": { "id": report_id },
            "merchandiser": { "id": merchandiser_id }
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["report"]["id"], report_id);
    assert_eq!(body["report"]["title"], "Weekly shelf audit");
    assert_eq!(body["merchandiser"]["name"], "Ana Souza");
    assert!(body.get("createdAt").is_some());
    assert!(body.get("updatedAt").is_some());
}

#[sqlx::test]
async fn test_create_duplicate_is_conflict(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, report_id) = seed_pair(&pool).await;
    common::create_test_favorite(&pool, merchandiser_id, report_id).await;
    let (name, value) = bearer(&token);

    let response = server
        .post("/v1/favorites")
        .add_header(name, value)
        .json(&json!({
            "report": { "id": report_id },
            "merchandiser": { "id": merchandiser_id }
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
    assert_eq!(common::count_favorites(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_missing_report_is_bad_request(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, _) = seed_pair(&pool).await;
    let (name, value) = bearer(&token);

    let response = server
        .post("/v1/favorites")
        .add_header(name, value)
        .json(&json!({ "merchandiser": { "id": merchandiser_id } }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"]["details"].get("report").is_some());
}

#[sqlx::test]
async fn test_create_unknown_report_is_not_found(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, _) = seed_pair(&pool).await;
    let (name, value) = bearer(&token);

    let response = server
        .post("/v1/favorites")
        .add_header(name, value)
        .json(&json!({
            "report": { "id": 999_999 },
            "merchandiser": { "id": merchandiser_id }
        }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_list_favorites_pages(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let merchandiser_id = common::create_test_merchandiser(&pool, "Ana Souza").await;
    for i in 0..3 {
        let report_id = common::create_test_report(&pool, &format!("Report {i}")).await;
        common::create_test_favorite(&pool, merchandiser_id, report_id).await;
    }

    let (name, value) = bearer(&token);
    let first = server
        .get("/v1/favorites")
        .add_query_param("page", 1)
        .add_query_param("limit", 2)
        .add_header(name, value)
        .await;

    first.assert_status_ok();
    let body: Value = first.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["hasNextPage"], true);

    let (name, value) = bearer(&token);
    let second = server
        .get("/v1/favorites")
        .add_query_param("page", 2)
        .add_query_param("limit", 2)
        .add_header(name, value)
        .await;

    let body: Value = second.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["hasNextPage"], false);
}

#[sqlx::test]
async fn test_list_exactly_full_page_has_no_next(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let merchandiser_id = common::create_test_merchandiser(&pool, "Ana Souza").await;
    for i in 0..2 {
        let report_id = common::create_test_report(&pool, &format!("Report {i}")).await;
        common::create_test_favorite(&pool, merchandiser_id, report_id).await;
    }
    let (name, value) = bearer(&token);

    let response = server
        .get("/v1/favorites")
        .add_query_param("limit", 2)
        .add_header(name, value)
        .await;

    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["hasNextPage"], false);
}

#[sqlx::test]
async fn test_list_empty(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (name, value) = bearer(&token);

    let response = server.get("/v1/favorites").add_header(name, value).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "data": [], "hasNextPage": false }));
}

#[sqlx::test]
async fn test_list_rejects_zero_limit(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (name, value) = bearer(&token);

    let response = server
        .get("/v1/favorites")
        .add_query_param("limit", 0)
        .add_header(name, value)
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_get_favorite(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, report_id) = seed_pair(&pool).await;
    let id = common::create_test_favorite(&pool, merchandiser_id, report_id).await;
    let (name, value) = bearer(&token);

    let response = server
        .get(&format!("/v1/favorites/{id}"))
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], id);
}

#[sqlx::test]
async fn test_get_missing_favorite(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (name, value) = bearer(&token);

    let response = server
        .get("/v1/favorites/424242")
        .add_header(name, value)
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_favorites_by_merchandiser(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let ana = common::create_test_merchandiser(&pool, "Ana Souza").await;
    let tom = common::create_test_merchandiser(&pool, "Tom Berg").await;
    let report_id = common::create_test_report(&pool, "Report").await;
    common::create_test_favorite(&pool, ana, report_id).await;
    common::create_test_favorite(&pool, tom, report_id).await;
    let (name, value) = bearer(&token);

    let response = server
        .get(&format!("/v1/favorites/merchandiser/{ana}"))
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["merchandiser"]["id"], ana);
}

#[sqlx::test]
async fn test_lookup(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, report_id) = seed_pair(&pool).await;
    let other_report = common::create_test_report(&pool, "Other").await;
    let id = common::create_test_favorite(&pool, merchandiser_id, report_id).await;

    let (name, value) = bearer(&token);
    let found = server
        .get("/v1/favorites/lookup")
        .add_query_param("merchandiserId", merchandiser_id)
        .add_query_param("reportId", report_id)
        .add_header(name, value)
        .await;

    found.assert_status_ok();
    assert_eq!(found.json::<Value>()["id"], id);

    let (name, value) = bearer(&token);
    let missing = server
        .get("/v1/favorites/lookup")
        .add_query_param("merchandiserId", merchandiser_id)
        .add_query_param("reportId", other_report)
        .add_header(name, value)
        .await;

    missing.assert_status_ok();
    assert_eq!(missing.json::<Value>(), Value::Null);
}

#[sqlx::test]
async fn test_toggle_twice_leaves_no_row(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, report_id) = seed_pair(&pool).await;
    let body = json!({
        "report": { "id": report_id },
        "merchandiser": { "id": merchandiser_id }
    });

    let (name, value) = bearer(&token);
    let added = server
        .post("/v1/favorites/toggle")
        .add_header(name, value)
        .json(&body)
        .await;

    added.assert_status_ok();
    let added: Value = added.json();
    assert_eq!(added["favorited"], true);
    assert_eq!(added["favorite"]["report"]["id"], report_id);
    assert_eq!(common::count_favorites(&pool).await, 1);

    let (name, value) = bearer(&token);
    let removed = server
        .post("/v1/favorites/toggle")
        .add_header(name, value)
        .json(&body)
        .await;

    let removed: Value = removed.json();
    assert_eq!(removed["favorited"], false);
    assert_eq!(removed["favorite"], Value::Null);
    assert_eq!(common::count_favorites(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_is_idempotent(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (merchandiser_id, report_id) = seed_pair(&pool).await;
    let id = common::create_test_favorite(&pool, merchandiser_id, report_id).await;

    let (name, value) = bearer(&token);
    server
        .delete(&format!("/v1/favorites/{id}"))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(common::count_favorites(&pool).await, 0);

    let (name, value) = bearer(&token);
    server
        .delete(&format!("/v1/favorites/{id}"))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[sqlx::test]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let (server, _) = setup(&pool).await;

    let response = server.get("/v1/favorites").await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[sqlx::test]
async fn test_unknown_token_is_unauthorized(pool: PgPool) {
    let (server, _) = setup(&pool).await;
    let (name, value) = bearer("not-a-real-token");

    let response = server.get("/v1/favorites").add_header(name, value).await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_revoked_token_is_unauthorized(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    sqlx::query("UPDATE api_tokens SET revoked_at = NOW()")
        .execute(&pool)
        .await
        .unwrap();
    let (name, value) = bearer(&token);

    let response = server.get("/v1/favorites").add_header(name, value).await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_authenticated_request_records_usage(pool: PgPool) {
    let (server, token) = setup(&pool).await;
    let (name, value) = bearer(&token);

    server
        .get("/v1/favorites")
        .add_header(name, value)
        .await
        .assert_status_ok();

    let last_used: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_used_at FROM api_tokens WHERE name = 'integration'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(last_used.is_some());
}

#[sqlx::test]
async fn test_authenticated_token_reaches_handlers(pool: PgPool) {
    use axum::{Extension, routing::get};
    use favorites_service::domain::repositories::ApiToken;

    async fn token_name(Extension(token): Extension<ApiToken>) -> String {
        token.name
    }

    let state = common::create_test_state(pool.clone());
    let token = common::create_api_token(&pool, "back-office").await;
    let app = Router::new()
        .nest(
            "/v1",
            protected_routes()
                .route("/whoami", get(token_name))
                .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .with_state(state);
    let server = TestServer::new(app).unwrap();
    let (name, value) = bearer(&token);

    let response = server.get("/v1/whoami").add_header(name, value).await;

    response.assert_status_ok();
    response.assert_text("back-office");
}
