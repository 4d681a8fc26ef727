//! Razorpay order processor.
//!
//! Creates orders through `POST /v1/orders`. One request per call, bounded by
//! the configured processor timeout, no retries.
//!
//! ```ignore
//! let config = Arc::new(PaymentConfig::with_credentials(key_id, key_secret));
//! let processor = RazorpayOrderProcessor::new(config)?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;

use crate::config::PaymentConfig;
use crate::domain::checkout::ProcessorErrorDetails;
use crate::ports::{OrderProcessor, ProcessorError, ProcessorOrder, ProcessorOrderRequest};

use super::api_types::RazorpayErrorEnvelope;

/// Razorpay implementation of `OrderProcessor`.
pub struct RazorpayOrderProcessor {
    config: Arc<PaymentConfig>,
    http_client: reqwest::Client,
}

impl RazorpayOrderProcessor {
    /// Create a processor whose HTTP client times out after
    /// `config.processor_timeout_secs`.
    ///
    /// # Errors
    ///
    /// Fails if the underlying TLS backend cannot be initialized.
    pub fn new(config: Arc<PaymentConfig>) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.processor_timeout())
            .build()?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a processor around an existing client.
    pub fn with_http_client(config: Arc<PaymentConfig>, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn orders_url(&self) -> String {
        format!(
            "{}/v1/orders",
            self.config.api_base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl OrderProcessor for RazorpayOrderProcessor {
    async fn create_order(
        &self,
        request: ProcessorOrderRequest,
    ) -> Result<ProcessorOrder, ProcessorError> {
        let (Some(key_id), Some(key_secret)) = (self.config.key_id(), self.config.key_secret())
        else {
            return Err(ProcessorError::authentication(
                "Payment processor credentials are not configured",
                ProcessorErrorDetails::with_code("MISSING_CREDENTIALS"),
            ));
        };

        let response = self
            .http_client
            .post(self.orders_url())
            .basic_auth(key_id, Some(key_secret.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = error_from_response(status, &body);
            tracing::error!(
                status = status.as_u16(),
                code = error.details.code.as_deref().unwrap_or("unknown"),
                reason = error.details.reason.as_deref().unwrap_or("unknown"),
                receipt = %request.receipt,
                "Razorpay create_order failed"
            );
            return Err(error);
        }

        let order: ProcessorOrder = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProcessorError::timeout()
            } else {
                tracing::error!(error = %e, "Failed to parse Razorpay order response");
                ProcessorError::invalid_response("Payment processor returned an unreadable order")
            }
        })?;

        tracing::debug!(order_id = %order.id, status = ?order.status, "Razorpay order created");
        Ok(order)
    }
}

/// Classify a failure to get any response at all.
fn transport_error(err: reqwest::Error) -> ProcessorError {
    if err.is_timeout() {
        tracing::warn!("Razorpay create_order timed out");
        return ProcessorError::timeout();
    }
    tracing::error!(error = %err.without_url(), "Razorpay create_order request failed");
    ProcessorError::network("Failed to reach payment processor")
}

/// Turn a non-2xx response into a `ProcessorError`, keeping Razorpay's
/// structured fields when the body has them.
fn error_from_response(status: StatusCode, body: &str) -> ProcessorError {
    let details = serde_json::from_str::<RazorpayErrorEnvelope>(body)
        .map(|envelope| ProcessorErrorDetails::from(envelope.error))
        .unwrap_or_else(|_| ProcessorErrorDetails::with_code(format!("HTTP_{}", status.as_u16())));

    let message = details
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Payment processor returned HTTP {}", status.as_u16()));

    if status == StatusCode::UNAUTHORIZED {
        ProcessorError::authentication(message, details)
    } else {
        ProcessorError::api(message, details)
    }
}
