//! Test helpers for the HTTP API tests.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use anonboard::web::handlers::AppState;
use anonboard::web::middleware::RateLimitState;
use anonboard::web::router::create_router;
use anonboard::Database;

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Arc<Database>) {
    create_test_server_with_limit(1000).await
}

/// Create a test server with a custom per-client rate limit.
pub async fn create_test_server_with_limit(api_rate_limit: u32) -> (TestServer, Arc<Database>) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let shared_db = Arc::new(db);

    let app_state = Arc::new(AppState::new(shared_db.clone()));
    let rate_limit_state = Arc::new(RateLimitState::new(api_rate_limit));
    let router = create_router(app_state, rate_limit_state, &[]);

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, shared_db)
}

/// Start a thread and return the created thread JSON.
pub async fn create_thread(server: &TestServer, board: &str, text: &str, password: &str) -> Value {
    let response = server
        .post(&format!("/api/threads/{}", board))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Reply to a thread and return the created reply JSON.
pub async fn create_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> Value {
    let response = server
        .post(&format!("/api/replies/{}", board))
        .json(&json!({ "thread_id": thread_id, "text": text, "delete_password": password }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Fetch a thread with all its replies.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> Value {
    let response = server
        .get(&format!("/api/replies/{}", board))
        .add_query_param("thread_id", thread_id)
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// ID of a thread or reply JSON.
pub fn id_of(value: &Value) -> String {
    value["_id"].as_str().expect("missing _id").to_string()
}

/// Assert that no object in the value carries moderation fields.
pub fn assert_no_private_fields(value: &Value) {
    match value {
        Value::Object(map) => {
            assert!(!map.contains_key("reported"), "reported leaked: {}", value);
            assert!(
                !map.contains_key("delete_password"),
                "delete_password leaked: {}",
                value
            );
            map.values().for_each(assert_no_private_fields);
        }
        Value::Array(items) => items.iter().for_each(assert_no_private_fields),
        _ => {}
    }
}
