//! Integration tests for the checkout HTTP surface.
//!
//! Drives the full application router (health, fallback, middleware and both
//! checkout endpoints) with the mock order processor.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use payment_relay::adapters::http::{app_router, CheckoutAppState};
use payment_relay::adapters::MockOrderProcessor;
use payment_relay::config::{PaymentConfig, ServerConfig};
use payment_relay::domain::checkout::{compute_signature, ProcessorErrorDetails};
use payment_relay::ports::ProcessorError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const KEY_ID: &str = "rzp_test_integration";
const KEY_SECRET: &str = "s3cr3t";

fn configured() -> PaymentConfig {
    PaymentConfig::with_credentials(KEY_ID, KEY_SECRET)
}

fn app(processor: MockOrderProcessor, payment: PaymentConfig) -> Router {
    let state = CheckoutAppState::new(Arc::new(processor), Arc::new(payment));
    app_router(state, &ServerConfig::default())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn order_body() -> Value {
    json!({"amount": 500, "currency": "INR", "userId": "u1", "name": "Jane"})
}

fn genuine_signature() -> String {
    compute_signature(
        &SecretString::new(KEY_SECRET.to_string()),
        "order_abc",
        "pay_xyz",
    )
}

fn verify_body(signature: &str) -> Value {
    json!({
        "razorpay_order_id": "order_abc",
        "razorpay_payment_id": "pay_xyz",
        "razorpay_signature": signature
    })
}

// =============================================================================
// Order Creation
// =============================================================================

#[tokio::test]
async fn valid_order_is_forwarded_once_and_returns_processor_id() {
    let processor = MockOrderProcessor::returning("order_Nx8yQ2");

    let (status, body) = send(
        app(processor.clone(), configured()),
        post_json("/api/create-order", order_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"orderId": "order_Nx8yQ2"}));

    let calls = processor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].amount, 500);
    assert_eq!(calls[0].currency, "INR");
    assert!(calls[0].receipt.starts_with("rcpt_u1_"));
    assert!(calls[0].receipt.len() <= 40);
    assert_eq!(calls[0].notes["userId"], "u1");
    assert_eq!(calls[0].notes["name"], "Jane");
}

#[tokio::test]
async fn optional_fields_reach_processor_notes() {
    let processor = MockOrderProcessor::new();
    let body = json!({
        "amount": 12500,
        "currency": "INR",
        "userId": "user_42",
        "name": "Asha",
        "email": "asha@example.in",
        "contact": "9876543210"
    });

    let (status, _) = send(
        app(processor.clone(), configured()),
        post_json("/api/create-order", body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let notes = &processor.calls()[0].notes;
    assert_eq!(notes["email"], "asha@example.in");
    assert_eq!(notes["contact"], "9876543210");
}

#[tokio::test]
async fn amount_below_minimum_is_rejected_without_processor_call() {
    let processor = MockOrderProcessor::new();
    let body = json!({"amount": 50, "currency": "INR", "userId": "u1", "name": "Jane"});

    let (status, body) = send(
        app(processor.clone(), configured()),
        post_json("/api/create-order", body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("at least 100"));
    assert_eq!(processor.call_count(), 0);
}

#[tokio::test]
async fn short_contact_is_rejected() {
    let processor = MockOrderProcessor::new();
    let mut body = order_body();
    body["contact"] = json!("12345");

    let (status, body) = send(
        app(processor.clone(), configured()),
        post_json("/api/create-order", body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Contact must be a 10-digit phone number"}));
    assert_eq!(processor.call_count(), 0);
}

#[tokio::test]
async fn every_invalid_input_skips_the_processor() {
    let invalid_bodies = [
        json!({}),
        json!({"amount": 500, "currency": "INR", "userId": "u1"}),
        json!({"amount": "500", "currency": "INR", "userId": "u1", "name": "Jane"}),
        json!({"amount": 100.5, "currency": "INR", "userId": "u1", "name": "Jane"}),
        json!({"amount": 500, "currency": "USD", "userId": "u1", "name": "Jane"}),
        json!({"amount": 500, "currency": "INR", "userId": "u1", "name": "Jane", "email": "jane@"}),
        json!({"amount": 500, "currency": "INR", "userId": "   ", "name": "Jane"}),
    ];

    for body in invalid_bodies {
        let processor = MockOrderProcessor::new();
        let (status, response) = send(
            app(processor.clone(), configured()),
            post_json("/api/create-order", body.clone()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(response["error"].is_string(), "body: {body}");
        assert_eq!(processor.call_count(), 0, "body: {body}");
    }
}

#[tokio::test]
async fn missing_fields_are_listed_together() {
    let (status, body) = send(
        app(MockOrderProcessor::new(), configured()),
        post_json("/api/create-order", json!({"currency": "INR"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: amount, userId, name"
    );
}

#[tokio::test]
async fn missing_credentials_are_a_server_error() {
    let processor = MockOrderProcessor::new();

    let (status, body) = send(
        app(processor.clone(), PaymentConfig::default()),
        post_json("/api/create-order", order_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error");
    assert!(!body.to_string().contains("RAZORPAY"));
    assert_eq!(processor.call_count(), 0);
}

#[tokio::test]
async fn upstream_rejection_surfaces_processor_details() {
    let processor = MockOrderProcessor::failing(ProcessorError::api(
        "Order amount less than minimum amount allowed",
        ProcessorErrorDetails {
            code: Some("BAD_REQUEST_ERROR".to_string()),
            description: Some("Order amount less than minimum amount allowed".to_string()),
            reason: Some("input_validation_failed".to_string()),
            ..Default::default()
        },
    ));

    let (status, body) = send(
        app(processor, configured()),
        post_json("/api/create-order", order_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create order");
    assert_eq!(body["details"], "Order amount less than minimum amount allowed");
    assert_eq!(body["razorpayError"]["code"], "BAD_REQUEST_ERROR");
    assert_eq!(body["razorpayError"]["reason"], "input_validation_failed");
}

#[tokio::test]
async fn processor_timeout_is_a_server_error() {
    let (status, body) = send(
        app(MockOrderProcessor::failing(ProcessorError::timeout()), configured()),
        post_json("/api/create-order", order_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["razorpayError"]["code"], "TIMEOUT");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/create-order")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"amount": 500,"#))
        .unwrap();

    let (status, body) = send(app(MockOrderProcessor::new(), configured()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

// =============================================================================
// Payment Verification
// =============================================================================

#[tokio::test]
async fn genuine_signature_is_accepted() {
    assert_eq!(
        genuine_signature(),
        "ee21698235c31aef5bb049b86d1c00014db7de75dbe78cb4ed9ffa8e90855655"
    );

    let (status, body) = send(
        app(MockOrderProcessor::new(), configured()),
        post_json("/api/verify-payment", verify_body(&genuine_signature())),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success"}));
}

#[tokio::test]
async fn other_hex_signature_is_rejected() {
    let forged = "f".repeat(64);

    let (status, body) = send(
        app(MockOrderProcessor::new(), configured()),
        post_json("/api/verify-payment", verify_body(&forged)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid signature"}));
}

#[tokio::test]
async fn missing_verification_fields_differ_from_bad_signature() {
    let (status, body) = send(
        app(MockOrderProcessor::new(), configured()),
        post_json(
            "/api/verify-payment",
            json!({"razorpay_order_id": "order_abc"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: razorpay_payment_id, razorpay_signature"
    );
}

#[tokio::test]
async fn verification_without_secret_is_a_server_error() {
    let (status, body) = send(
        app(MockOrderProcessor::new(), PaymentConfig::default()),
        post_json("/api/verify-payment", verify_body(&genuine_signature())),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error");
}

#[tokio::test]
async fn verification_never_calls_the_processor() {
    let processor = MockOrderProcessor::new();

    send(
        app(processor.clone(), configured()),
        post_json("/api/verify-payment", verify_body(&genuine_signature())),
    )
    .await;

    assert_eq!(processor.call_count(), 0);
}

// =============================================================================
// Service Surface
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(MockOrderProcessor::new(), configured()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/refund")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(MockOrderProcessor::new(), configured()), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}
