use axum::{
    Json, Router, middleware,
    routing::{get, post},
};

use recordgate_types::api::HealthResponse;

use crate::auth::{self, AppState};
use crate::middleware::require_auth;
use crate::records;

/// Login is public; the record routes sit behind `require_auth`.
pub fn safe_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/login/", post(auth::login))
        .route("/health", get(health));

    let protected_routes = Router::new()
        .route("/api/data/", get(records::get_data))
        .route("/api/records/", post(records::insert_record))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(protected_routes).with_state(state)
}

/// Same record paths as `safe_router`, with no gate and no login.
#[cfg(feature = "injectable")]
pub fn injectable_router(db: crate::injectable::InjectableState) -> Router {
    use crate::injectable;

    Router::new()
        .route("/api/data/", get(injectable::get_data))
        .route("/api/records/", post(injectable::insert_record))
        .route("/health", get(health))
        .with_state(db)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
