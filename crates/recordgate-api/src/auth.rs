use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use tracing::{debug, info};

use recordgate_db::Database;
use recordgate_types::api::{LoginRequest, LoginResponse};

use crate::blocking;
use crate::error::ApiError;
use crate::password::PasswordHasher;
use crate::token::TokenService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
}

impl AppStateInner {
    pub fn new(db: Database, jwt_secret: &str) -> AppState {
        Arc::new(Self {
            db,
            tokens: TokenService::new(jwt_secret),
            hasher: PasswordHasher::new(),
        })
    }
}

/// POST /auth/login/: exchange username and password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!("Login body rejected: {}", rejection);
        match rejection {
            // Valid JSON whose fields have the wrong types.
            JsonRejection::JsonDataError(_) => ApiError::BadCredentials,
            _ => ApiError::MissingBody,
        }
    })?;

    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(ApiError::BadCredentials);
    };

    let db = state.clone();
    let user_id = blocking(move || {
        let user = db.db.get_user_by_username(&username)?;
        match user {
            Some(user) if db.hasher.verify(&password, &user.password) => Ok(user.id),
            Some(_) => Err(ApiError::BadCredentials),
            None => {
                db.hasher.verify_dummy(&password);
                Err(ApiError::BadCredentials)
            }
        }
    })
    .await?;

    let access_token = state.tokens.issue(user_id, Utc::now())?;
    info!(user_id, "Login succeeded");

    Ok(Json(LoginResponse { access_token }))
}
