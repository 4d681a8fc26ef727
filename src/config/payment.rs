//! Payment configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Environment variable names for the processor credentials.
pub const RAZORPAY_KEY_ID_VAR: &str = "RAZORPAY_KEY_ID";
pub const RAZORPAY_KEY_SECRET_VAR: &str = "RAZORPAY_KEY_SECRET";

/// Payment configuration (Razorpay)
///
/// Credentials are optional at load time. A missing key is reported by the
/// checkout handlers as a server configuration error on every affected request
/// instead of preventing the process from starting.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay key id (rzp_test_... or rzp_live_...)
    pub razorpay_key_id: Option<String>,

    /// Razorpay key secret; also the HMAC key for payment signatures
    pub razorpay_key_secret: Option<SecretString>,

    /// Base URL for the Razorpay API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for a single order-creation call, in seconds
    #[serde(default = "default_processor_timeout")]
    pub processor_timeout_secs: u64,
}

impl PaymentConfig {
    /// Build a configuration holding the given credentials and defaults elsewhere.
    pub fn with_credentials(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            razorpay_key_id: Some(key_id.into()),
            razorpay_key_secret: Some(SecretString::new(key_secret.into())),
            ..Default::default()
        }
    }

    /// Key id, if configured and non-empty.
    pub fn key_id(&self) -> Option<&str> {
        self.razorpay_key_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Key secret, if configured and non-empty.
    pub fn key_secret(&self) -> Option<&SecretString> {
        self.razorpay_key_secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
    }

    /// Name of the first missing credential, if any.
    pub fn missing_credential(&self) -> Option<&'static str> {
        if self.key_id().is_none() {
            return Some(RAZORPAY_KEY_ID_VAR);
        }
        if self.key_secret().is_none() {
            return Some(RAZORPAY_KEY_SECRET_VAR);
        }
        None
    }

    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id().is_some_and(|id| id.starts_with("rzp_test_"))
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.key_id().is_some_and(|id| id.starts_with("rzp_live_"))
    }

    /// Outbound order-creation timeout as a `Duration`
    pub fn processor_timeout(&self) -> Duration {
        Duration::from_secs(self.processor_timeout_secs)
    }

    /// Fill unset credentials from the un-prefixed `RAZORPAY_*` variables.
    pub fn fill_from_legacy_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.key_id().is_none() {
            if let Some(id) = lookup(RAZORPAY_KEY_ID_VAR) {
                self.razorpay_key_id = Some(id);
            }
        }
        if self.key_secret().is_none() {
            if let Some(secret) = lookup(RAZORPAY_KEY_SECRET_VAR) {
                self.razorpay_key_secret = Some(SecretString::new(secret));
            }
        }
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://"))
        {
            return Err(ValidationError::InvalidProcessorUrl);
        }
        if self.processor_timeout_secs == 0 || self.processor_timeout_secs > 120 {
            return Err(ValidationError::InvalidProcessorTimeout);
        }

        // Verify key prefix for safety
        if let Some(id) = self.key_id() {
            if !id.starts_with("rzp_") {
                return Err(ValidationError::InvalidRazorpayKeyId);
            }
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: None,
            razorpay_key_secret: None,
            api_base_url: default_api_base_url(),
            processor_timeout_secs: default_processor_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

fn default_processor_timeout() -> u64 {
    10
}
