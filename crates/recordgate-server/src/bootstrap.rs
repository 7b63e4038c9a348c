use anyhow::Context;
use tracing::info;

use recordgate_api::password::PasswordHasher;
use recordgate_db::{Database, DbError};

use crate::config::{Config, DefaultAccount};

/// Open the configured database (creating schema as needed) and seed the
/// default account when one is configured.
pub fn prepare_database(config: &Config, hasher: &PasswordHasher) -> anyhow::Result<Database> {
    let db = Database::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;

    if let Some(account) = &config.default_account {
        seed_default_account(&db, hasher, account)?;
    }

    Ok(db)
}

/// Create the account unless a user with that name already exists.
/// Returns whether a user was created.
pub fn seed_default_account(
    db: &Database,
    hasher: &PasswordHasher,
    account: &DefaultAccount,
) -> anyhow::Result<bool> {
    if db.get_user_by_username(&account.username)?.is_some() {
        return Ok(false);
    }

    let hash = hasher
        .hash(&account.password)
        .map_err(|e| anyhow::anyhow!("failed to hash default password: {e}"))?;

    match db.create_user(&account.username, &hash) {
        Ok(id) => {
            info!(user_id = id, "Added default user {}", account.username);
            Ok(true)
        }
        // Another process seeded it between the lookup and the insert.
        Err(DbError::UniqueViolation { .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> DefaultAccount {
        DefaultAccount {
            username: "admin".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn seeding_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let hasher = PasswordHasher::new();

        assert!(seed_default_account(&db, &hasher, &account()).unwrap());
        assert!(!seed_default_account(&db, &hasher, &account()).unwrap());

        let user = db.get_user_by_username("admin").unwrap().unwrap();
        assert!(hasher.verify("hunter2", &user.password));
        assert_ne!(user.password, "hunter2");
    }

    #[test]
    fn existing_user_is_left_alone() {
        let db = Database::open_in_memory().unwrap();
        let hasher = PasswordHasher::new();
        let original = hasher.hash("original").unwrap();
        db.create_user("admin", &original).unwrap();

        assert!(!seed_default_account(&db, &hasher, &account()).unwrap());
        assert_eq!(db.get_user_by_username("admin").unwrap().unwrap().password, original);
    }

    #[test]
    fn prepare_creates_file_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            secret_key: None,
            db_path: dir.path().join("project.db"),
            host: "127.0.0.1".into(),
            port: 0,
            default_account: Some(account()),
        };
        let hasher = PasswordHasher::new();

        let db = prepare_database(&config, &hasher).unwrap();
        assert!(config.db_path.exists());
        assert!(db.get_user_by_username("admin").unwrap().is_some());
        drop(db);

        // Second start over the same file finds the user already there.
        let db = prepare_database(&config, &hasher).unwrap();
        assert!(db.get_user_by_username("admin").unwrap().is_some());
    }
}
