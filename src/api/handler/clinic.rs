use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::models::api::{ClinicResponse, LinkResponse, WhatsAppParams};
use crate::models::{AppState, AppointmentDraft, Service};

pub async fn clinic_handler(State(state): State<Arc<AppState>>) -> Json<ClinicResponse> {
    Json(ClinicResponse {
        info: state.clinic.clone(),
        links: state.clinic.links(),
    })
}

pub async fn whatsapp_link_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WhatsAppParams>,
) -> Response {
    let service = match params.service.as_deref().map(str::parse::<Service>).transpose() {
        Ok(service) => service.unwrap_or_default(),
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    };

    let draft = AppointmentDraft {
        name: params.name,
        phone: params.phone,
        date: params.date,
        time: params.time,
        service,
        ..Default::default()
    };

    Json(LinkResponse {
        url: state.clinic.whatsapp_link(&draft),
    })
    .into_response()
}
