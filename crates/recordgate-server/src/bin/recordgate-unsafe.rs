//! Serves the injectable record routes. For demonstrating SQL and markup
//! injection only; never expose this binary.

use std::sync::Arc;

use tracing::warn;

use recordgate_api::password::PasswordHasher;
use recordgate_api::router::injectable_router;
use recordgate_server::bootstrap::prepare_database;
use recordgate_server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    recordgate_server::init_tracing();

    let config = Config::from_env()?;
    let db = prepare_database(&config, &PasswordHasher::new())?;
    warn!("Serving unauthenticated, injectable record routes");

    recordgate_server::serve(injectable_router(Arc::new(db)), config.addr()?, "unsafe").await
}
