//! Payment signature verification.
//!
//! When a payment completes, the processor signs `order_id|payment_id` with
//! HMAC-SHA256 keyed by the shared key secret and hands the lowercase hex
//! digest to the client. Recomputing that digest here is the only evidence
//! that the client did not make the payment up.
//!
//! # Security
//!
//! - Constant-time comparison via `subtle`
//! - Mismatches carry no detail about which bytes differed

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::ValidationError;

type HmacSha256 = Hmac<Sha256>;

/// The exact byte string the processor signs.
pub fn canonical_message(order_id: &str, payment_id: &str) -> String {
    format!("{}|{}", order_id, payment_id)
}

/// Lowercase hex HMAC-SHA256 of the canonical message.
pub fn compute_signature(secret: &SecretString, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(canonical_message(order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// A client's claim that a payment completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentVerification {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

impl PaymentVerification {
    /// Build from the three client fields, all of which are required.
    ///
    /// # Errors
    ///
    /// `MissingFields` naming every absent or empty field.
    pub fn new(
        order_id: Option<String>,
        payment_id: Option<String>,
        signature: Option<String>,
    ) -> Result<Self, ValidationError> {
        let order_id = order_id.filter(|v| !v.is_empty());
        let payment_id = payment_id.filter(|v| !v.is_empty());
        let signature = signature.filter(|v| !v.is_empty());

        match (order_id, payment_id, signature) {
            (Some(order_id), Some(payment_id), Some(signature)) => Ok(Self {
                order_id,
                payment_id,
                signature,
            }),
            (order_id, payment_id, signature) => {
                let mut missing = Vec::new();
                if order_id.is_none() {
                    missing.push("razorpay_order_id");
                }
                if payment_id.is_none() {
                    missing.push("razorpay_payment_id");
                }
                if signature.is_none() {
                    missing.push("razorpay_signature");
                }
                Err(ValidationError::MissingFields(missing))
            }
        }
    }
}

/// Result of checking a payment signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    InvalidSignature,
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }
}

/// Checks payment signatures against the shared key secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: SecretString,
}

impl SignatureVerifier {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Recompute the signature and compare it in constant time.
    pub fn verify(&self, payment: &PaymentVerification) -> VerificationOutcome {
        let expected = compute_signature(&self.secret, &payment.order_id, &payment.payment_id);

        if constant_time_compare(expected.as_bytes(), payment.signature.as_bytes()) {
            VerificationOutcome::Verified
        } else {
            VerificationOutcome::InvalidSignature
        }
    }
}

/// Only the length comparison can exit early, and signature length is public.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
