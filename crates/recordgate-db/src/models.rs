//! Database row types. These map directly to SQLite rows.
//! Distinct from recordgate-types wire models to keep the DB layer independent.

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    /// PHC-formatted password hash.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: i64,
    pub text: String,
}
