pub mod auth;
pub mod error;
#[cfg(feature = "injectable")]
pub mod injectable;
pub mod middleware;
pub mod password;
pub mod records;
pub mod render;
pub mod router;
pub mod token;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::anyhow;
use tracing::error;

use crate::error::ApiError;

/// Run blocking work (SQLite, Argon2) off the async runtime.
pub(crate) async fn blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal(anyhow!("blocking task failed: {e}"))
    })?
}
