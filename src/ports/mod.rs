//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `OrderProcessor` - Order creation at the payment processor

mod order_processor;

pub use order_processor::{
    OrderProcessor, ProcessorError, ProcessorErrorKind, ProcessorOrder, ProcessorOrderRequest,
};
