//! Domain layer - the checkout rules with no I/O.
//!
//! Order validation, receipt derivation and payment signature verification
//! live here. Nothing in this layer talks to the network or reads the
//! environment; configuration and the processor client are injected from above.

pub mod checkout;
