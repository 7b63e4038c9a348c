use crate::models::{RecordRow, UserRow};
use crate::{Database, Result};
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Users --

    /// Insert a user and return the id assigned by SQLite. Fails with
    /// `DbError::UniqueViolation` when the username is taken.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<i64> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO users (username, password) VALUES (?1, ?2)",
                (username, password_hash),
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(id)
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            query_user(
                conn,
                "SELECT id, username, password FROM users WHERE username = ?1",
                username,
            )
        })
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            query_user(conn, "SELECT id, username, password FROM users WHERE id = ?1", id)
        })
    }

    // -- Records --

    /// Store `text` as a bound parameter inside its own transaction. The text
    /// is never part of the statement, whatever it contains. On error the
    /// transaction is dropped uncommitted, which rolls it back.
    pub fn insert_record(&self, text: &str) -> Result<RecordRow> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute("INSERT INTO record (text) VALUES (?1)", [text])?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(RecordRow {
                id,
                text: text.to_string(),
            })
        })
    }

    /// All records in insertion order.
    pub fn list_records(&self) -> Result<Vec<RecordRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, text FROM record ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(RecordRow {
                        id: row.get(0)?,
                        text: row.get(1)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

fn query_user<P: rusqlite::ToSql>(conn: &Connection, sql: &str, key: P) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(sql)?;

    let row = stmt
        .query_row([key], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}
