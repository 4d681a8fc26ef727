//! Razorpay API wire types.

use serde::Deserialize;

use crate::domain::checkout::ProcessorErrorDetails;

/// Error response body: `{"error": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorEnvelope {
    pub error: RazorpayErrorBody,
}

/// Fields of a Razorpay error object. Razorpay sends `"NA"` for fields that
/// do not apply, and sometimes `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RazorpayErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

impl From<RazorpayErrorBody> for ProcessorErrorDetails {
    fn from(body: RazorpayErrorBody) -> Self {
        ProcessorErrorDetails {
            code: body.code,
            description: body.description,
            source: body.source,
            step: body.step,
            reason: body.reason,
        }
    }
}
