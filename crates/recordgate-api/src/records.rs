use axum::{
    Extension, Form, Json,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use tracing::{debug, info};

use recordgate_types::api::{RecordForm, RecordResponse};

use crate::auth::AppState;
use crate::blocking;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::render::{escape_html, render_page};

/// GET /api/data/: every record, escaped, as an HTML list.
pub async fn get_data(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Html<String>, ApiError> {
    let db = state.clone();
    let records = blocking(move || Ok(db.db.list_records()?)).await?;
    debug!(user_id = user.id, username = %user.username, count = records.len(), "Records listed");

    let texts: Vec<String> = records.iter().map(|r| escape_html(&r.text)).collect();
    Ok(Html(render_page(&texts)))
}

/// POST /api/records/: store the `text` form field as a bound parameter and
/// echo it back escaped.
pub async fn insert_record(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    form: Result<Form<RecordForm>, FormRejection>,
) -> Result<Json<RecordResponse>, ApiError> {
    let text = form_text(form)?;

    let db = state.clone();
    let record = blocking(move || db.db.insert_record(&text).map_err(ApiError::Persistence)).await?;
    info!(
        record_id = record.id,
        user_id = user.id,
        username = %user.username,
        "Record stored"
    );

    Ok(Json(RecordResponse {
        text: escape_html(&record.text),
    }))
}

pub(crate) fn form_text(form: Result<Form<RecordForm>, FormRejection>) -> Result<String, ApiError> {
    form.ok()
        .and_then(|Form(form)| form.text)
        .ok_or(ApiError::MissingField("text"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use recordgate_types::api::{MessageBody, RecordResponse};

    use crate::test_utils::{create_test_app, login_token};

    async fn post_record(server: &TestServer, token: &str, text: &str) -> axum_test::TestResponse {
        server
            .post("/api/records/")
            .add_header("Authorization", format!("Bearer {token}"))
            .form(&[("text", text)])
            .await
    }

    #[tokio::test]
    async fn injection_payload_is_stored_as_one_literal_record() {
        let (server, state) = create_test_app();
        let token = login_token(&server).await;
        state.db.insert_record("before").unwrap();

        let payload = "a'); DROP TABLE record; --";
        let response = post_record(&server, &token, payload).await;
        response.assert_status(StatusCode::OK);

        let records = state.db.list_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "before");
        assert_eq!(records[1].text, payload);
    }

    #[tokio::test]
    async fn insert_echoes_escaped_text() {
        let (server, state) = create_test_app();
        let token = login_token(&server).await;

        let response = post_record(&server, &token, "<b>hi</b> & 'bye'").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.json::<RecordResponse>().text,
            "&lt;b&gt;hi&lt;/b&gt; &amp; &#39;bye&#39;"
        );

        // Stored as sent; escaping happens on the way out.
        assert_eq!(state.db.list_records().unwrap()[0].text, "<b>hi</b> & 'bye'");
    }

    #[tokio::test]
    async fn listing_escapes_stored_markup() {
        let (server, _state) = create_test_app();
        let token = login_token(&server).await;

        post_record(&server, &token, "<script>alert(1)</script>")
            .await
            .assert_status(StatusCode::OK);

        let response = server
            .get("/api/data/")
            .add_header("Authorization", format!("Bearer {token}"))
            .await;
        response.assert_status(StatusCode::OK);

        let page = response.text();
        assert!(page.contains("<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"));
        assert!(!page.contains("<script>"));
    }

    #[tokio::test]
    async fn listing_keeps_insertion_order() {
        let (server, state) = create_test_app();
        let token = login_token(&server).await;
        for text in ["one", "two", "three"] {
            state.db.insert_record(text).unwrap();
        }

        let page = server
            .get("/api/data/")
            .add_header("Authorization", format!("Bearer {token}"))
            .await
            .text();
        assert!(page.contains("<li>one</li>\n<li>two</li>\n<li>three</li>"));
    }

    #[tokio::test]
    async fn missing_text_field_is_bad_request() {
        let (server, state) = create_test_app();
        let token = login_token(&server).await;

        let response = server
            .post("/api/records/")
            .add_header("Authorization", format!("Bearer {token}"))
            .form(&[("other", "value")])
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<MessageBody>(),
            MessageBody::new("Missing form field: text")
        );
        assert!(state.db.list_records().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_write_is_reported() {
        let (server, state) = create_test_app();
        let token = login_token(&server).await;

        state
            .db
            .with_conn(|conn| {
                conn.execute_batch(
                    "CREATE TRIGGER reject_all BEFORE INSERT ON record
                     BEGIN SELECT RAISE(ABORT, 'read only'); END;",
                )?;
                Ok(())
            })
            .unwrap();

        let response = post_record(&server, &token, "lost").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<MessageBody>(), MessageBody::new("Failed to store record"));
        assert!(state.db.list_records().unwrap().is_empty());
    }
}
