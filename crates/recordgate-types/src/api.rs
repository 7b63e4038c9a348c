use serde::{Deserialize, Serialize};

// -- JWT Claims --

/// Claims carried by every bearer token. The signature covers both fields,
/// so neither can be altered without invalidating the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    /// Unix timestamp (seconds) at which the token stops being accepted.
    pub exp: i64,
}

// -- Auth --

/// Both fields are optional on the wire: a body without them is still a
/// body, and is answered with bad credentials rather than a parse error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// -- Records --

/// Form body of `POST /api/records/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordForm {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub text: String,
}

// -- Misc --

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub msg: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
