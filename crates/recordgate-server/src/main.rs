use recordgate_api::auth::AppStateInner;
use recordgate_api::password::PasswordHasher;
use recordgate_api::router::safe_router;
use recordgate_server::bootstrap::prepare_database;
use recordgate_server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    recordgate_server::init_tracing();

    let config = Config::from_env()?;
    let secret = config.require_secret()?;

    let db = prepare_database(&config, &PasswordHasher::new())?;
    let state = AppStateInner::new(db, secret);

    recordgate_server::serve(safe_router(state), config.addr()?, "safe").await
}
