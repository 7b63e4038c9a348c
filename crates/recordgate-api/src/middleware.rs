use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::auth::AppState;
use crate::blocking;
use crate::error::ApiError;

/// The caller resolved by `require_auth`, available to handlers through
/// `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Extract and validate the bearer token, then resolve the user it names.
/// Any failure ends the request with a 401 before the handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or(ApiError::MissingToken)?;
    let user_id = state.tokens.validate(token, Utc::now())?;

    let db = state.clone();
    let user = blocking(move || Ok(db.db.get_user_by_id(user_id)?))
        .await?
        .ok_or(ApiError::UserNotFound)?;

    req.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
    });
    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>`. The scheme is matched case-insensitively;
/// any other scheme counts as no token.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    scheme.eq_ignore_ascii_case("Bearer").then_some(token)
}
