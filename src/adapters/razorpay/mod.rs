//! Razorpay payment processor adapter.
//!
//! Implements the `OrderProcessor` port against the Razorpay Orders API.
//!
//! # Security
//!
//! - Requests authenticate with HTTP basic auth (`key_id:key_secret`)
//! - The key secret is held as `secrecy::SecretString` and never logged
//! - Errors forwarded to clients carry only Razorpay's structured error fields
//!
//! # Configuration
//!
//! Required environment variables:
//! - `PAYMENT_RELAY__PAYMENT__RAZORPAY_KEY_ID` (or `RAZORPAY_KEY_ID`)
//! - `PAYMENT_RELAY__PAYMENT__RAZORPAY_KEY_SECRET` (or `RAZORPAY_KEY_SECRET`)

mod api_types;
mod mock_order_processor;
mod razorpay_adapter;

pub use api_types::{RazorpayErrorBody, RazorpayErrorEnvelope};
pub use mock_order_processor::MockOrderProcessor;
pub use razorpay_adapter::RazorpayOrderProcessor;
