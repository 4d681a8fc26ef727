//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod checkout;

pub use checkout::{
    CreateOrderCommand, CreateOrderHandler, CreateOrderResult, VerifyPaymentCommand,
    VerifyPaymentHandler,
};
