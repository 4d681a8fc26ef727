//! Order processor port for the external payment processor.
//!
//! Defines the one capability the checkout flow needs from the processor:
//! creating an order. Implementations perform a single call per request and
//! never retry; the caller decides what to do with a failure.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::{CheckoutError, ProcessorErrorDetails};

/// Port for creating orders at the payment processor.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    /// Create an order and return the processor's view of it.
    async fn create_order(
        &self,
        request: ProcessorOrderRequest,
    ) -> Result<ProcessorOrder, ProcessorError>;
}

/// Normalized order sent to the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorOrderRequest {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// ISO currency code.
    pub currency: String,

    /// Merchant receipt identifier.
    pub receipt: String,

    /// Opaque key/value metadata stored with the order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
}

/// Order as returned by the processor. Only `id` is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorOrder {
    /// Processor-issued order id.
    pub id: String,

    #[serde(default)]
    pub entity: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub receipt: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Unix timestamp.
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl ProcessorOrder {
    /// An order carrying only its id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity: None,
            amount: None,
            currency: None,
            receipt: None,
            status: None,
            created_at: None,
        }
    }
}

/// Errors from the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorError {
    /// Failure category.
    pub kind: ProcessorErrorKind,

    /// Sanitized, human-readable message.
    pub message: String,

    /// Structured detail from the processor, when it sent any.
    pub details: ProcessorErrorDetails,
}

impl ProcessorError {
    pub fn new(kind: ProcessorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: ProcessorErrorDetails::default(),
        }
    }

    pub fn with_details(mut self, details: ProcessorErrorDetails) -> Self {
        self.details = details;
        self
    }

    /// The call did not complete within the configured timeout.
    pub fn timeout() -> Self {
        Self::new(
            ProcessorErrorKind::Timeout,
            "Payment processor did not respond in time",
        )
        .with_details(ProcessorErrorDetails::with_code("TIMEOUT"))
    }

    /// The processor could not be reached.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorKind::Network, message)
            .with_details(ProcessorErrorDetails::with_code("NETWORK_ERROR"))
    }

    /// Credentials were missing or the processor refused them.
    pub fn authentication(message: impl Into<String>, details: ProcessorErrorDetails) -> Self {
        Self::new(ProcessorErrorKind::Authentication, message).with_details(details)
    }

    /// The processor answered with an error.
    pub fn api(message: impl Into<String>, details: ProcessorErrorDetails) -> Self {
        Self::new(ProcessorErrorKind::Api, message).with_details(details)
    }

    /// The processor answered with something we could not decode.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProcessorErrorKind::InvalidResponse, message)
            .with_details(ProcessorErrorDetails::with_code("INVALID_RESPONSE"))
    }
}

impl fmt::Display for ProcessorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ProcessorError {}

impl From<ProcessorError> for CheckoutError {
    fn from(err: ProcessorError) -> Self {
        CheckoutError::upstream(err.message, err.details)
    }
}

/// Processor error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorErrorKind {
    /// Request timed out.
    Timeout,

    /// Connectivity failure.
    Network,

    /// Credentials missing or rejected by the processor.
    Authentication,

    /// Processor returned an error response.
    Api,

    /// Processor response could not be parsed.
    InvalidResponse,
}

impl fmt::Display for ProcessorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessorErrorKind::Timeout => "timeout",
            ProcessorErrorKind::Network => "network_error",
            ProcessorErrorKind::Authentication => "authentication_error",
            ProcessorErrorKind::Api => "api_error",
            ProcessorErrorKind::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
