//! Record insertion by string interpolation.
//!
//! The caller's text is pasted into the statement and the result is run as a
//! script, so a text such as `'); DELETE FROM record; --` executes extra
//! statements with the same privileges as the insert. This is the vulnerable
//! half of the safe/unsafe comparison and must never back a real deployment.

use tracing::debug;

use crate::{Database, Result};

impl Database {
    /// Build the INSERT by substituting `text` into the statement and run
    /// every statement in the resulting string. Nothing is escaped and no
    /// transaction wraps the script: statements that ran before a failure
    /// stay applied.
    ///
    /// No row id is returned: after an injected script the connection's last
    /// insert id need not belong to the row built from `text`.
    pub fn insert_record_unchecked(&self, text: &str) -> Result<()> {
        let sql = format!("INSERT INTO record (text) VALUES ('{text}')");
        debug!("{}", sql);

        self.with_conn(|conn| Ok(conn.execute_batch(&sql)?))
    }
}
