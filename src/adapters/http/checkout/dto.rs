//! HTTP DTOs (Data Transfer Objects) for checkout endpoints.
//!
//! These types define the JSON request/response structure for the checkout API.
//! Field names follow what existing clients already send: camelCase for order
//! creation, Razorpay's snake_case callback fields for verification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreateOrderCommand, VerifyPaymentCommand};
use crate::domain::checkout::{OrderCreationRequest, ProcessorErrorDetails};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create an order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Amount in paise. Kept as raw JSON so type errors become validation errors.
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl From<CreateOrderRequest> for CreateOrderCommand {
    fn from(request: CreateOrderRequest) -> Self {
        CreateOrderCommand {
            order: OrderCreationRequest {
                amount: request.amount,
                currency: request.currency,
                user_id: request.user_id,
                name: request.name,
                email: request.email,
                contact: request.contact,
            },
        }
    }
}

/// Request to verify a completed payment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

impl From<VerifyPaymentRequest> for VerifyPaymentCommand {
    fn from(request: VerifyPaymentRequest) -> Self {
        VerifyPaymentCommand {
            order_id: request.razorpay_order_id,
            payment_id: request.razorpay_payment_id,
            signature: request.razorpay_signature,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for order creation. Only the processor order id is exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
}

/// Response for a verified payment.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentResponse {
    pub status: &'static str,
}

impl VerifyPaymentResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(rename = "razorpayError", skip_serializing_if = "Option::is_none")]
    pub razorpay_error: Option<ProcessorErrorDetails>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            razorpay_error: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_razorpay_error(mut self, error: ProcessorErrorDetails) -> Self {
        self.razorpay_error = Some(error);
        self
    }
}
