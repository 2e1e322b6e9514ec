//! Integration tests for the REST endpoints, driven through the router
//! without binding a socket.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use flightcast::artifacts::FsArtifactStore;
use flightcast::http::{create_router, AppState};

fn fixture_state(dir: &std::path::Path) -> AppState {
    support::write_artifacts(dir);
    AppState::new(Arc::new(FsArtifactStore::open(dir).unwrap()))
}

fn empty_state(dir: &std::path::Path) -> AppState {
    AppState::new(Arc::new(FsArtifactStore::open(dir).unwrap()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = create_router(state);
    let response = ServiceExt::<Request<Body>>::oneshot(app, request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn march_body() -> Value {
    json!({
        "date": "2024-03-12",
        "airline": "WN",
        "origin": "Chicago",
        "destination": "Denver",
        "departure_time": "23:30",
        "arrival_time": "02:45",
        "distance": 5215.0
    })
}

fn november_body() -> Value {
    json!({
        "date": "2024-11-05",
        "airline": "DL",
        "origin": "Chicago",
        "destination": "Denver",
        "departure_time": "09:15",
        "arrival_time": "11:40",
        "distance": 450.0
    })
}

#[tokio::test]
async fn predict_returns_cancellation_block() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    let (status, body) = send(state, post_json("/predict", &march_body())).await;
    assert_eq!(status, StatusCode::OK);

    let predictions = &body["predictions"];
    assert_eq!(predictions["cancelled"], true);
    assert_eq!(predictions["cancellation_code"], "B - Weather");
    assert!(predictions.get("delay").is_none());

    let raw = support::sigmoid(support::EARLY_MONTH_MARGIN);
    let pair = &predictions["cancelled_probability"];
    assert!(close(pair["cancelled"].as_f64().unwrap(), raw));
    assert!(close(pair["not_cancelled"].as_f64().unwrap(), 1.0 - raw));

    let causes = predictions["cancellation_code_probabilities"]
        .as_object()
        .unwrap();
    assert_eq!(causes.len(), 5);
    let total: f64 = causes.values().map(|v| v.as_f64().unwrap()).sum();
    assert!(close(total, 1.0));

    let adjustments = &predictions["model_adjustments"];
    assert_eq!(adjustments["correction_factor"], 1.0);
    assert_eq!(adjustments["threshold_used"], 0.45);
    assert!(adjustments["corrections_applied"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn predict_returns_delay_block_for_corrected_flight() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    let (status, body) = send(state, post_json("/predict", &november_body())).await;
    assert_eq!(status, StatusCode::OK);

    let predictions = &body["predictions"];
    assert_eq!(predictions["cancelled"], false);
    assert!(predictions.get("cancellation_code").is_none());
    assert!(predictions.get("cancellation_code_probabilities").is_none());

    let delay = &predictions["delay"];
    assert_eq!(delay["delay_class"], "On time or early");
    assert_eq!(delay["delay_probabilities"].as_object().unwrap().len(), 4);

    let applied: Vec<&str> = predictions["model_adjustments"]["corrections_applied"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        applied,
        vec!["Daytime flight", "Short distance", "Reliable airline"]
    );

    let factor = predictions["model_adjustments"]["correction_factor"]
        .as_f64()
        .unwrap();
    assert!(close(factor, 0.5 * 0.6 * 0.7));
}

#[tokio::test]
async fn predict_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    // Only the date is required; the zero-distance default trips the
    // short-distance rule.
    let (status, body) = send(state, post_json("/predict", &json!({"date": "2024-03-12"}))).await;
    assert_eq!(status, StatusCode::OK);

    let predictions = &body["predictions"];
    let applied = predictions["model_adjustments"]["corrections_applied"]
        .as_array()
        .unwrap();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0], "Short distance");

    // sigmoid(2) * 0.6 still clears the 0.45 threshold.
    assert_eq!(predictions["cancelled"], true);
}

#[tokio::test]
async fn predict_rejects_invalid_date() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    let mut body = march_body();
    body["date"] = json!("03/12/2024");

    let (status, error) = send(state, post_json("/predict", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn predict_rejects_invalid_departure_time() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    let mut body = march_body();
    body["departure_time"] = json!("noonish");

    let (status, error) = send(state, post_json("/predict", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn predict_without_models_is_service_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let state = empty_state(dir.path());

    let (status, error) = send(state, post_json("/predict", &march_body())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());
    let app = create_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from("{\"date\": "))
        .unwrap();
    let response = ServiceExt::<Request<Body>>::oneshot(app, request)
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn airlines_lists_encoder_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    let (status, body) = send(state, get("/airlines")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["airlines"], json!(support::AIRLINES));
}

#[tokio::test]
async fn cities_lists_encoder_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    let (status, body) = send(state, get("/cities")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cities"], json!(support::CITIES));
}

#[tokio::test]
async fn vocabulary_without_models_is_service_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let state = empty_state(dir.path());

    let (status, error) = send(state, get("/airlines")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn health_reports_lazy_model_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());

    // Health never forces a load.
    let (status, body) = send(state.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["models"], "not loaded");

    // A prediction loads the context; health sees it through the shared
    // state.
    let (status, _) = send(state.clone(), post_json("/predict", &march_body())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(state, get("/health")).await;
    assert_eq!(body["models"], "loaded");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let dir = tempfile::tempdir().unwrap();
    let state = fixture_state(dir.path());
    let app = create_router(state);

    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = ServiceExt::<Request<Body>>::oneshot(app, request)
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
