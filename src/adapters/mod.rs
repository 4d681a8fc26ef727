//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `razorpay` - Razorpay order processor (and a mock for tests)
//! - `http` - REST API exposing the checkout operations

pub mod http;
pub mod razorpay;

pub use razorpay::{MockOrderProcessor, RazorpayOrderProcessor};
