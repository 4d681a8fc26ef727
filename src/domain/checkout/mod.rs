//! Checkout domain module.
//!
//! Gatekeeping for the two checkout operations: the rules an order request
//! must satisfy before it may reach the payment processor, and the HMAC check
//! that proves a client-reported payment really came from the processor.
//!
//! # Module Structure
//!
//! - `errors` - Field validation errors and the checkout error taxonomy
//! - `order` - Order request validation and normalization
//! - `receipt` - Receipt identifier derivation
//! - `signature` - Payment signature computation and verification

mod errors;
mod order;
mod receipt;
mod signature;

pub use errors::{CheckoutError, ProcessorErrorDetails, ValidationError};
pub use order::{
    OrderCreationRequest, ValidatedOrder, CONTACT_DIGITS, MIN_ORDER_AMOUNT, SUPPORTED_CURRENCIES,
};
pub use receipt::{Receipt, MAX_RECEIPT_LEN, RECEIPT_PREFIX, RECEIPT_USER_ID_LEN};
pub use signature::{
    canonical_message, compute_signature, PaymentVerification, SignatureVerifier,
    VerificationOutcome,
};
