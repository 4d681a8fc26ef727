//! Checkout command handlers.

mod create_order;
mod verify_payment;

pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentHandler};
