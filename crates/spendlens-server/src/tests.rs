//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Local;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use spendlens_core::db::Database;
use spendlens_core::models::NewTransaction;
use tower::ServiceExt;

fn setup_test_db() -> Database {
    let db = Database::in_memory().unwrap();
    let customer_id = db.create_customer("Louise").unwrap();
    db.insert_transaction(
        customer_id,
        &NewTransaction {
            date: Local::now().date_naive(),
            description: "description".to_string(),
            amount: Decimal::new(400000, 2),
            category: "restaurants".to_string(),
            vendor: "Nandos'".to_string(),
            import_hash: "server_test_1".to_string(),
        },
    )
    .unwrap();
    db
}

fn setup_test_app() -> Router {
    create_router(setup_test_db(), ServerConfig::default())
}

async fn get_response(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ========== Insight API Tests ==========

#[tokio::test]
async fn test_customer_insights() {
    let response = get_response(setup_test_app(), "/api/v1/customer/insights/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([{ "insight": "You've spent £4000 in restaurants this month" }])
    );
}

#[tokio::test]
async fn test_unknown_customer_is_not_found() {
    let response = get_response(setup_test_app(), "/api/v1/customer/insights/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Customer with id 99 not found");
}

#[tokio::test]
async fn test_customer_without_transactions_is_not_found() {
    let db = setup_test_db();
    let empty = db.create_customer("Nobody").unwrap();
    let app = create_router(db, ServerConfig::default());

    let response = get_response(app, &format!("/api/v1/customer/insights/{}", empty)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_positive_customer_id_rejected() {
    for id in ["0", "-5"] {
        let response = get_response(setup_test_app(), &format!("/api/v1/customer/insights/{}", id)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {}", id);

        let json = get_body_json(response).await;
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Customer id must be greater than 0");
    }
}

#[tokio::test]
async fn test_non_numeric_customer_id_rejected() {
    for id in ["abc", "1.5", "99999999999999999999"] {
        let response =
            get_response(setup_test_app(), &format!("/api/v1/customer/insights/{}", id)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {}", id);

        let json = get_body_json(response).await;
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Customer id must be a number");
    }
}

// ========== Health & Headers ==========

#[tokio::test]
async fn test_health() {
    let response = get_response(setup_test_app(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_security_headers() {
    let response = get_response(setup_test_app(), "/api/health").await;

    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
}

#[tokio::test]
async fn test_unknown_route() {
    let response = get_response(setup_test_app(), "/api/v1/customers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = ServerConfig {
        allowed_origins: vec!["https://app.example.com".to_string()],
    };
    let app = create_router(setup_test_db(), config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "https://app.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.example.com"
    );
}

// ========== Error Mapping ==========

#[test]
fn test_app_error_mapping() {
    let err = AppError::from(spendlens_core::Error::CustomerNotFound(7));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message(), "Customer with id 7 not found");

    // Plumbing failures never leak their details
    let err = AppError::from(spendlens_core::Error::Import("secret path".into()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "An internal error occurred");
}

#[test]
fn test_parse_origins() {
    assert_eq!(
        parse_origins(" https://a.example , ,https://b.example"),
        vec!["https://a.example", "https://b.example"]
    );
    assert!(parse_origins("").is_empty());
}
