use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::error::RelayError;
use crate::models::api::{RelayAck, RelaySubmission};
use crate::models::AppState;
use crate::services::forward_appointment;

/// Email-forwarding relay: `{ "ok": true }` once the clinic has been mailed,
/// `{ "error": ... }` otherwise, including for bodies that do not parse.
pub async fn relay_submit_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RelaySubmission>, JsonRejection>,
) -> Result<Json<RelayAck>, RelayError> {
    let Json(submission) = payload.map_err(|e| RelayError::Invalid(e.body_text()))?;
    forward_appointment(state.mailer.as_ref(), &submission).await?;
    Ok(Json(RelayAck { ok: true }))
}
