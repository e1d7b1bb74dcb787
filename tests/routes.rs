use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot`

use sonobook::{models::AppState, router, AppConfig};

fn test_app(vars: &[(&str, &str)]) -> Router {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
    router(Arc::new(AppState::from_config(config).unwrap()))
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn asha() -> Value {
    json!({
        "name": "Asha",
        "phone": "9999999999",
        "date": "2024-05-01",
        "time": "10:00",
        "service": "X-ray"
    })
}

#[tokio::test]
async fn clinic_info_includes_deep_links() {
    let (status, body) = call(test_app(&[("CLINIC_EMAIL", "desk@clinic.in")]), get("/clinic")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mayank Sonography and Diagnostic Center");
    assert_eq!(body["links"]["tel"][0], "tel:+918982050533");
    assert_eq!(
        body["links"]["mail"],
        "mailto:desk@clinic.in?subject=Appointment%20Request"
    );
    assert!(body["bookable_services"]
        .as_array()
        .unwrap()
        .contains(&json!("Fetal Doppler")));
}

#[tokio::test]
async fn whatsapp_link_route_prefills_draft() {
    let (status, body) = call(
        test_app(&[("WHATSAPP_PHONE", "+91 12345 67890")]),
        get("/links/whatsapp?name=Asha&phone=9999999999&date=2024-05-01&time=10%3A00&service=X-ray"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/911234567890?text="));
    let text = urlencoding::decode(url.split_once("text=").unwrap().1).unwrap();
    assert!(text.contains("Name: Asha"));
    assert!(text.contains("Preferred time: 10:00"));
    assert!(text.contains("Service: X-ray"));
}

#[tokio::test]
async fn whatsapp_link_route_rejects_unknown_service() {
    let (status, body) = call(test_app(&[]), get("/links/whatsapp?service=MRI")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "unknown service 'MRI'");
}

#[tokio::test]
async fn book_without_required_fields_is_unprocessable() {
    let (status, body) = call(test_app(&[]), post_json("/book", json!({ "name": "Asha" }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"]["kind"], "failure");
    assert_eq!(body["status"]["message"], "कृपया नाम, फोन और तारीख भरें।");
    assert_eq!(body["draft"]["name"], "Asha");
}

#[tokio::test]
async fn book_rejects_unknown_field() {
    let (status, body) = call(test_app(&[]), post_json("/book", json!({ "age": "40" }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "unknown form field 'age'");
}

#[tokio::test]
async fn book_answers_json_error_for_non_string_values() {
    let (status, body) = call(
        test_app(&[]),
        post_json("/book", json!({ "name": "Asha", "phone": 9999999999u64 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("invalid type"));
}

#[tokio::test]
async fn book_answers_json_error_for_unknown_service() {
    let mut fields = asha();
    fields["service"] = json!("MRI");
    let (status, body) = call(test_app(&[]), post_json("/book", fields)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "unknown service 'MRI'");
}

#[tokio::test]
async fn book_relays_and_resets_on_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/f/clinic");
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;
    let endpoint = server.url("/f/clinic");

    let (status, body) = call(
        test_app(&[("FORM_ENDPOINT", endpoint.as_str()), ("LOCALE", "en")]),
        post_json("/book", asha()),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"]["kind"], "success");
    assert_eq!(body["draft"]["name"], "");
    assert_eq!(body["draft"]["service"], "Ultrasound (USG)");
}

#[tokio::test]
async fn book_surfaces_relay_rejection_as_bad_gateway() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/f/clinic");
            then.status(422).json_body(json!({ "error": "duplicate" }));
        })
        .await;
    let endpoint = server.url("/f/clinic");

    let (status, body) = call(
        test_app(&[("FORM_ENDPOINT", endpoint.as_str())]),
        post_json("/book", asha()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"]["message"], "duplicate");
    assert_eq!(body["draft"]["name"], "Asha");
}

#[tokio::test]
async fn relay_submit_without_mail_config_fails_to_send() {
    let (status, body) = call(test_app(&[]), post_json("/api/submit", asha())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to send" }));
}

#[tokio::test]
async fn relay_submit_requires_name_phone_and_date() {
    let (status, body) = call(
        test_app(&[("MAIL_API_KEY", "test-key"), ("MAIL_FROM", "noreply@clinic.in")]),
        post_json("/api/submit", json!({ "name": "Asha" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "name, phone and date are required");
}

#[tokio::test]
async fn relay_submit_mails_the_clinic() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1.1/email")
                .header("authorization", "test-key");
            then.status(201).json_body(json!({ "message": "OK" }));
        })
        .await;
    let api_url = server.url("/v1.1/email");

    let (status, body) = call(
        test_app(&[
            ("MAIL_API_URL", api_url.as_str()),
            ("MAIL_API_KEY", "test-key"),
            ("MAIL_FROM", "noreply@clinic.in"),
            ("CONTACT_EMAIL", "desk@clinic.in"),
        ]),
        post_json("/api/submit", asha()),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn relay_submit_reports_mail_api_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1.1/email");
            then.status(401).body("bad token");
        })
        .await;
    let api_url = server.url("/v1.1/email");

    let (status, body) = call(
        test_app(&[
            ("MAIL_API_URL", api_url.as_str()),
            ("MAIL_API_KEY", "wrong"),
            ("MAIL_FROM", "noreply@clinic.in"),
        ]),
        post_json("/api/submit", asha()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to send" }));
}

#[tokio::test]
async fn relay_submit_forwards_any_service_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1.1/email");
            then.status(201).json_body(json!({ "message": "OK" }));
        })
        .await;
    let api_url = server.url("/v1.1/email");

    let mut fields = asha();
    fields["service"] = json!("MRI");
    let (status, body) = call(
        test_app(&[
            ("MAIL_API_URL", api_url.as_str()),
            ("MAIL_API_KEY", "test-key"),
            ("MAIL_FROM", "noreply@clinic.in"),
        ]),
        post_json("/api/submit", fields),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn relay_submit_answers_json_error_for_non_string_values() {
    let mut fields = asha();
    fields["phone"] = json!(9999999999u64);
    let (status, body) = call(
        test_app(&[("MAIL_API_KEY", "test-key"), ("MAIL_FROM", "noreply@clinic.in")]),
        post_json("/api/submit", fields),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("invalid type"));
}

#[tokio::test]
async fn relay_submit_gives_up_on_a_hung_mail_api() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1.1/email");
            then.status(201).delay(Duration::from_secs(5));
        })
        .await;
    let api_url = server.url("/v1.1/email");

    let (status, body) = call(
        test_app(&[
            ("MAIL_API_URL", api_url.as_str()),
            ("MAIL_API_KEY", "test-key"),
            ("MAIL_FROM", "noreply@clinic.in"),
            ("RELAY_TIMEOUT_SECS", "1"),
        ]),
        post_json("/api/submit", asha()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "failed to send" }));
}

#[tokio::test]
async fn relay_submit_only_accepts_post() {
    let (status, _) = call(test_app(&[]), get("/api/submit")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
