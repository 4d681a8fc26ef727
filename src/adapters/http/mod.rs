//! HTTP adapters - REST API implementations.
//!
//! `checkout` exposes the two checkout operations; `router` assembles the
//! full application with health check, 404 fallback and middleware layers.

pub mod checkout;
pub mod router;

// Re-export key types for convenience
pub use checkout::{checkout_router, CheckoutAppState};
pub use router::app_router;
