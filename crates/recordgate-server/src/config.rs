use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};

/// Placeholder secrets that MUST NOT be used to sign tokens.
const PLACEHOLDER_SECRETS: &[&str] = &[
    "change-me-to-a-random-string",
    "dev-secret-change-me",
    "secret",
];

/// Account created at startup when it does not exist yet.
pub struct DefaultAccount {
    pub username: String,
    pub password: String,
}

/// Process configuration, read once at startup from `RECORDGATE_*` variables.
pub struct Config {
    pub secret_key: Option<String>,
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub default_account: Option<DefaultAccount>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and empty values are treated alike.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("RECORDGATE_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("RECORDGATE_PORT is not a port number: {port}"))?,
            None => 5000,
        };

        // Seeding needs both halves; a lone username is ignored.
        let default_account = match (
            get("RECORDGATE_DEFAULT_USERNAME"),
            get("RECORDGATE_DEFAULT_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(DefaultAccount { username, password }),
            _ => None,
        };

        Ok(Self {
            secret_key: get("RECORDGATE_SECRET_KEY"),
            db_path: get("RECORDGATE_DB_PATH")
                .unwrap_or_else(|| "project.db".into())
                .into(),
            host: get("RECORDGATE_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            default_account,
        })
    }

    /// The token signing secret. Missing or placeholder values are an error.
    pub fn require_secret(&self) -> anyhow::Result<&str> {
        match self.secret_key.as_deref() {
            None => bail!("RECORDGATE_SECRET_KEY is unset"),
            Some(secret) if PLACEHOLDER_SECRETS.contains(&secret) => {
                bail!("RECORDGATE_SECRET_KEY is still a placeholder")
            }
            Some(secret) => Ok(secret),
        }
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("invalid listen address {addr}"))
    }
}
