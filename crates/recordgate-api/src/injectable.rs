//! The vulnerable record routes: no auth gate, string-built SQL, unescaped
//! output. Two independent injection classes, kept for comparison with
//! `records`.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use tracing::warn;

use recordgate_db::Database;
use recordgate_types::api::{RecordForm, RecordResponse};

use crate::blocking;
use crate::error::ApiError;
use crate::records::form_text;
use crate::render::render_page;

pub type InjectableState = Arc<Database>;

/// GET /api/data/: stored text is placed into the page as-is.
pub async fn get_data(State(db): State<InjectableState>) -> Result<Html<String>, ApiError> {
    let records = blocking(move || Ok(db.list_records()?)).await?;

    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    Ok(Html(render_page(&texts)))
}

/// POST /api/records/: the `text` field is spliced into the INSERT statement.
pub async fn insert_record(
    State(db): State<InjectableState>,
    form: Result<Form<RecordForm>, FormRejection>,
) -> Result<Json<RecordResponse>, ApiError> {
    let text = form_text(form)?;
    warn!("Executing interpolated INSERT for untrusted input");

    let sql_text = text.clone();
    blocking(move || Ok(db.insert_record_unchecked(&sql_text)?)).await?;

    Ok(Json(RecordResponse { text }))
}
