//! Checkout error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | InvalidSignature | 400 |
//! | Configuration | 500 |
//! | Upstream | 500 |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A client-supplied field failed its constraint.
///
/// The `Display` text is the message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Amount must be an integer in the smallest currency unit (e.g. paise)")]
    AmountNotInteger,

    #[error("Amount must be at least {min} in the smallest currency unit (e.g. paise)")]
    AmountTooSmall { min: i64 },

    #[error("Unsupported currency '{currency}'. Supported currencies: {supported}")]
    UnsupportedCurrency { currency: String, supported: String },

    #[error("Contact must be a 10-digit phone number")]
    InvalidContact,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    /// Name of the offending request field, for logging.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MalformedBody(_) => "body",
            ValidationError::MissingFields(fields) => fields.first().copied().unwrap_or("body"),
            ValidationError::AmountNotInteger | ValidationError::AmountTooSmall { .. } => "amount",
            ValidationError::UnsupportedCurrency { .. } => "currency",
            ValidationError::InvalidContact => "contact",
            ValidationError::InvalidEmail => "email",
        }
    }
}

/// Structured error detail as reported by the payment processor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ProcessorErrorDetails {
    /// Details carrying only an error code.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

/// Everything that can stop a checkout operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Client input rejected before any processor call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Recomputed payment signature did not match.
    #[error("Invalid signature")]
    InvalidSignature,

    /// A required credential is missing from server configuration.
    ///
    /// Holds the variable name only, never a value.
    #[error("Payment configuration missing: {missing}")]
    Configuration { missing: &'static str },

    /// The processor rejected or failed the order-creation call.
    #[error("Payment processor error: {message}")]
    Upstream {
        message: String,
        details: ProcessorErrorDetails,
    },
}

impl CheckoutError {
    pub fn configuration(missing: &'static str) -> Self {
        CheckoutError::Configuration { missing }
    }

    pub fn upstream(message: impl Into<String>, details: ProcessorErrorDetails) -> Self {
        CheckoutError::Upstream {
            message: message.into(),
            details,
        }
    }

    /// Whether the caller is at fault (4xx) rather than the server (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CheckoutError::Validation(_) | CheckoutError::InvalidSignature
        )
    }

    /// Message safe to show to the client.
    pub fn client_message(&self) -> String {
        match self {
            CheckoutError::Validation(err) => err.to_string(),
            CheckoutError::InvalidSignature => "Invalid signature".to_string(),
            CheckoutError::Configuration { .. } => "Server configuration error".to_string(),
            CheckoutError::Upstream { .. } => "Failed to create order".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_every_field() {
        let err = ValidationError::MissingFields(vec!["amount", "name"]);
        assert_eq!(err.to_string(), "Missing required fields: amount, name");
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn amount_message_cites_minimum() {
        let err = ValidationError::AmountTooSmall { min: 100 };
        assert!(err.to_string().contains("at least 100"));
    }

    #[test]
    fn configuration_error_never_exposes_variable_to_client() {
        let err = CheckoutError::configuration("RAZORPAY_KEY_SECRET");
        assert!(!err.is_client_error());
        assert_eq!(err.client_message(), "Server configuration error");
        assert!(err.to_string().contains("RAZORPAY_KEY_SECRET"));
    }

    #[test]
    fn validation_and_signature_errors_are_client_errors() {
        assert!(CheckoutError::from(ValidationError::InvalidEmail).is_client_error());
        assert!(CheckoutError::InvalidSignature.is_client_error());
        assert!(!CheckoutError::upstream("boom", ProcessorErrorDetails::default()).is_client_error());
    }

    #[test]
    fn processor_details_skip_absent_fields() {
        let details = ProcessorErrorDetails::with_code("BAD_REQUEST_ERROR");
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json, serde_json::json!({"code": "BAD_REQUEST_ERROR"}));
    }
}
