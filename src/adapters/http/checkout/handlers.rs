//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the checkout command handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{CreateOrderCommand, CreateOrderHandler, VerifyPaymentHandler};
use crate::config::PaymentConfig;
use crate::domain::checkout::{CheckoutError, ValidationError, VerificationOutcome};
use crate::ports::OrderProcessor;

use super::dto::{
    CreateOrderRequest, CreateOrderResponse, ErrorResponse, VerifyPaymentRequest,
    VerifyPaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for checkout endpoints.
///
/// Cloned per request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub order_processor: Arc<dyn OrderProcessor>,
    pub payment_config: Arc<PaymentConfig>,
}

impl CheckoutAppState {
    pub fn new(order_processor: Arc<dyn OrderProcessor>, payment_config: Arc<PaymentConfig>) -> Self {
        Self {
            order_processor,
            payment_config,
        }
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.order_processor.clone(), self.payment_config.clone())
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(self.payment_config.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/create-order - Validate the request and create a processor order
pub async fn create_order(
    State(state): State<CheckoutAppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let Json(request) = payload.map_err(malformed_body)?;

    let handler = state.create_order_handler();
    let result = handler.handle(CreateOrderCommand::from(request)).await?;

    Ok(Json(CreateOrderResponse {
        order_id: result.order_id,
    }))
}

/// POST /api/verify-payment - Verify a completed payment's signature
pub async fn verify_payment(
    State(state): State<CheckoutAppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let Json(request) = payload.map_err(malformed_body)?;

    let handler = state.verify_payment_handler();
    match handler.handle(request.into()).await? {
        VerificationOutcome::Verified => Ok(Json(VerifyPaymentResponse::success())),
        VerificationOutcome::InvalidSignature => Err(CheckoutError::InvalidSignature.into()),
    }
}

fn malformed_body(rejection: JsonRejection) -> CheckoutApiError {
    tracing::info!(error = %rejection.body_text(), "Rejected unreadable request body");
    CheckoutError::from(ValidationError::MalformedBody(rejection.body_text())).into()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts checkout errors to HTTP responses.
#[derive(Debug)]
pub struct CheckoutApiError(CheckoutError);

impl CheckoutApiError {
    pub fn inner(&self) -> &CheckoutError {
        &self.0
    }
}

impl From<CheckoutError> for CheckoutApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> axum::response::Response {
        let message = self.0.client_message();
        let (status, body) = match self.0 {
            CheckoutError::Validation(_) | CheckoutError::InvalidSignature => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            CheckoutError::Configuration { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(message)
                    .with_details("Payment gateway credentials are not configured"),
            ),
            CheckoutError::Upstream {
                message: upstream_message,
                details,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(message)
                    .with_details(upstream_message)
                    .with_razorpay_error(details),
            ),
        };

        (status, Json(body)).into_response()
    }
}
