//! Shared fixtures for the handler tests.

use axum_test::TestServer;
use recordgate_db::Database;
use recordgate_types::api::LoginResponse;
use serde_json::json;

use crate::auth::{AppState, AppStateInner};
use crate::router::safe_router;

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";
pub const TEST_USERNAME: &str = "alice";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Safe router over an in-memory database holding one user.
pub fn create_test_app() -> (TestServer, AppState) {
    let db = Database::open_in_memory().unwrap();
    let state = AppStateInner::new(db, TEST_SECRET);

    let hash = state.hasher.hash(TEST_PASSWORD).unwrap();
    state.db.create_user(TEST_USERNAME, &hash).unwrap();

    let server = TestServer::new(safe_router(state.clone())).unwrap();
    (server, state)
}

#[cfg(feature = "injectable")]
pub fn create_injectable_app() -> (TestServer, std::sync::Arc<Database>) {
    let db = std::sync::Arc::new(Database::open_in_memory().unwrap());
    let server = TestServer::new(crate::router::injectable_router(db.clone())).unwrap();
    (server, db)
}

pub async fn login_token(server: &TestServer) -> String {
    let response = server
        .post("/auth/login/")
        .json(&json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }))
        .await;
    response.assert_status_ok();
    response.json::<LoginResponse>().access_token
}
