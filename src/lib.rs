//! Payment Relay - Razorpay checkout intermediary
//!
//! Validates order-creation requests before forwarding them to Razorpay and
//! verifies the HMAC-SHA256 signature Razorpay issues for a completed payment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
