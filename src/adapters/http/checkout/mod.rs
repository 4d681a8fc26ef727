//! HTTP adapter for checkout endpoints.
//!
//! Exposes the checkout domain via REST API:
//! - `POST /api/create-order` - Validate and create a processor order
//! - `POST /api/verify-payment` - Verify a completed payment's signature

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{create_order, verify_payment, CheckoutApiError, CheckoutAppState};
pub use routes::{checkout_router, checkout_routes};
