//! VerifyPaymentHandler - Command handler for payment signature verification.

use std::sync::Arc;

use crate::config::{PaymentConfig, RAZORPAY_KEY_SECRET_VAR};
use crate::domain::checkout::{
    CheckoutError, PaymentVerification, SignatureVerifier, VerificationOutcome,
};

/// Command carrying a client's payment confirmation.
#[derive(Debug, Clone, Default)]
pub struct VerifyPaymentCommand {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub signature: Option<String>,
}

/// Handler for payment verification.
///
/// Stateless: the same command always produces the same outcome. A signature
/// mismatch is an `Ok(VerificationOutcome::InvalidSignature)`, not an error.
pub struct VerifyPaymentHandler {
    config: Arc<PaymentConfig>,
}

impl VerifyPaymentHandler {
    pub fn new(config: Arc<PaymentConfig>) -> Self {
        Self { config }
    }

    pub async fn handle(
        &self,
        cmd: VerifyPaymentCommand,
    ) -> Result<VerificationOutcome, CheckoutError> {
        // 1. All three fields are required
        let payment = PaymentVerification::new(cmd.order_id, cmd.payment_id, cmd.signature)
            .map_err(|err| {
                tracing::info!(error = %err, "Rejected payment verification request");
                err
            })?;

        // 2. The key secret is the HMAC key
        let secret = self.config.key_secret().ok_or_else(|| {
            tracing::error!(
                missing = RAZORPAY_KEY_SECRET_VAR,
                "Cannot verify payment: key secret not configured"
            );
            CheckoutError::configuration(RAZORPAY_KEY_SECRET_VAR)
        })?;

        // 3. Recompute and compare
        let outcome = SignatureVerifier::new(secret.clone()).verify(&payment);

        match outcome {
            VerificationOutcome::Verified => tracing::info!(
                order_id = %payment.order_id,
                payment_id = %payment.payment_id,
                "Payment verified"
            ),
            VerificationOutcome::InvalidSignature => tracing::warn!(
                order_id = %payment.order_id,
                payment_id = %payment.payment_id,
                "Payment signature mismatch"
            ),
        }

        Ok(outcome)
    }
}
