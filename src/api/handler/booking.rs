use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::models::api::{BookingRequest, BookingResponse};
use crate::models::AppState;
use crate::services::BookingForm;

/// Runs one booking form against the configured relay.
pub async fn book_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let Json(fields) = match payload {
        Ok(fields) => fields,
        Err(e) => return unprocessable(e.body_text()),
    };

    let mut form = BookingForm::new(state.config.locale);

    for (name, value) in &fields {
        if let Err(e) = form.update_named(name, value) {
            return unprocessable(e.to_string());
        }
    }

    let pending = match form.begin_submit() {
        Ok(pending) => pending,
        Err(_) => return respond(StatusCode::UNPROCESSABLE_ENTITY, &form),
    };

    let outcome = state.relay.send(pending.draft()).await;
    let code = match outcome {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::BAD_GATEWAY,
    };
    form.finish_submit(pending, outcome);

    respond(code, &form)
}

fn unprocessable(error: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": error })),
    )
        .into_response()
}

fn respond(code: StatusCode, form: &BookingForm) -> Response {
    (
        code,
        Json(BookingResponse {
            status: form.status().clone(),
            draft: form.draft().clone(),
        }),
    )
        .into_response()
}
