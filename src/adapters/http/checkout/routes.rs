//! Axum router configuration for checkout endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_order, verify_payment, CheckoutAppState};

/// Create the checkout API routes.
///
/// # Routes
/// - `POST /create-order` - Validate and create a processor order
/// - `POST /verify-payment` - Verify a completed payment's signature
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify-payment", post(verify_payment))
}

/// Create the checkout router, suitable for merging at the application root.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .merge(checkout_router())
///     .with_state(CheckoutAppState::new(processor, config));
/// ```
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new().nest("/api", checkout_routes())
}
