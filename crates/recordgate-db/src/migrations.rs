use rusqlite::Connection;
use tracing::info;

use crate::Result;

/// Create the schema if it does not exist yet. Safe to run on every start.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS record (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            text        TEXT NOT NULL
        );
        ",
    )?;

    info!("Database schema ready");
    Ok(())
}
