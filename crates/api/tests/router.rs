//! Router-level tests: full HTTP round trips through axum without a socket

use api::{create_router, AppState, BANNER};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use inference_engine::{
    ClassificationModel, FeatureRow, InferenceError, ModelGateway, RegressionModel,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use prediction_service::PredictionService;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct FixedRegressor(f64);

impl RegressionModel for FixedRegressor {
    fn predict(&self, _row: &FeatureRow) -> Result<f64, InferenceError> {
        Ok(self.0)
    }
}

struct FixedClassifier(&'static str);

impl ClassificationModel for FixedClassifier {
    fn predict(&self, _row: &FeatureRow) -> Result<String, InferenceError> {
        Ok(self.0.to_string())
    }
}

struct BrokenClassifier;

impl ClassificationModel for BrokenClassifier {
    fn predict(&self, _row: &FeatureRow) -> Result<String, InferenceError> {
        Err(InferenceError::EmptyOutput)
    }
}

fn app(gateway: ModelGateway) -> Router {
    let metrics = PrometheusBuilder::new().build_recorder().handle();
    create_router(Arc::new(AppState::new(PredictionService::new(gateway), metrics)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_home() {
    let (status, body) = get(app(ModelGateway::empty()), "/").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "message": BANNER }));
    assert_eq!(body["message"], "✅ Air Pollution API is running!");
}

#[tokio::test]
async fn test_health_reports_models() {
    let gateway = ModelGateway::empty().with_regression(FixedRegressor(1.0));
    let (status, body) = get(app(gateway), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(
        body["models"],
        json!({"regression": true, "classification": false})
    );
}

#[tokio::test]
async fn test_pm25_fallback() {
    let (status, body) = post(
        app(ModelGateway::empty()),
        "/predict/pm25",
        r#"{"Latitude": 28.5, "Longitude": 77.0}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"predicted_PM2.5": 85.0, "method": "Fallback_Estimation"})
    );
}

#[tokio::test]
async fn test_pm25_missing_fields() {
    let (status, body) = post(app(ModelGateway::empty()), "/predict/pm25", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Latitude"));
    assert!(message.contains("Longitude"));
}

#[tokio::test]
async fn test_pm25_empty_and_malformed_bodies() {
    let (status, body) = post(app(ModelGateway::empty()), "/predict/pm25", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: Latitude, Longitude");

    let (status, body) = post(app(ModelGateway::empty()), "/predict/pm25", "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_pm25_non_numeric_is_bad_request() {
    let (status, _) = post(
        app(ModelGateway::empty()),
        "/predict/pm25",
        r#"{"Latitude": "north", "Longitude": 77.0}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pm25_model() {
    let gateway = ModelGateway::empty().with_regression(FixedRegressor(52.349));
    let (status, body) = post(
        app(gateway),
        "/predict/pm25",
        r#"{"Latitude": 28.5, "Longitude": 77.0, "PM10": 120}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"predicted_PM2.5": 52.35, "method": "ML_Model"}));
}

#[tokio::test]
async fn test_category_fallback() {
    let (status, body) = post(
        app(ModelGateway::empty()),
        "/predict/category",
        r#"{"PM2.5": 25}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"predicted_AQI_Category": "Good", "method": "Fallback_Estimation"})
    );

    let (_, body) = post(
        app(ModelGateway::empty()),
        "/predict/category",
        r#"{"PM2.5": 300}"#,
    )
    .await;
    assert_eq!(body["predicted_AQI_Category"], "Severe");
}

#[tokio::test]
async fn test_category_missing_field() {
    let (status, body) = post(
        app(ModelGateway::empty()),
        "/predict/category",
        r#"{"PM10": 1}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required field: PM2.5"}));
}

#[tokio::test]
async fn test_category_model_independent_of_regression() {
    let gateway = ModelGateway::empty().with_classification(FixedClassifier("Satisfactory"));
    let app = app(gateway);

    let (_, body) = post(app.clone(), "/predict/category", r#"{"PM2.5": 45}"#).await;
    assert_eq!(
        body,
        json!({"predicted_AQI_Category": "Satisfactory", "method": "ML_Model"})
    );

    let (_, body) = post(app, "/predict/pm25", r#"{"Latitude": 19.0, "Longitude": 72.9}"#).await;
    assert_eq!(
        body,
        json!({"predicted_PM2.5": 45.0, "method": "Fallback_Estimation"})
    );
}

#[tokio::test]
async fn test_model_failure_is_internal_error() {
    let gateway = ModelGateway::empty().with_classification(BrokenClassifier);
    let (status, body) = post(app(gateway), "/predict/category", r#"{"PM2.5": 45}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Model returned an empty output"}));
}

#[tokio::test]
async fn test_grid_not_implemented() {
    let (status, body) = post(app(ModelGateway::empty()), "/predict/grid", "{}").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(body["error"].as_str().unwrap().contains("not implemented"));
}

#[tokio::test]
async fn test_identical_requests_give_identical_bytes() {
    let app = app(ModelGateway::empty());
    let request = || {
        Request::builder()
            .method(Method::POST)
            .uri("/predict/category")
            .body(Body::from(r#"{"PM2.5": 95}"#))
            .unwrap()
    };
    let first = send(app.clone(), request()).await;
    let second = send(app, request()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cors_headers() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict/pm25")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(r#"{"Latitude": 13.0, "Longitude": 77.6}"#))
        .unwrap();
    let response = app(ModelGateway::empty()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (status, _) = get(app(ModelGateway::empty()), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_grid_ignores_body() {
    let (status, _) = post(app(ModelGateway::empty()), "/predict/grid", "not json").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}
