//! Receipt identifiers sent to the processor with each order.

use std::fmt;

/// Leading segment of every receipt.
pub const RECEIPT_PREFIX: &str = "rcpt";

/// How many characters of the user id make it into the receipt.
pub const RECEIPT_USER_ID_LEN: usize = 12;

/// Processor limit on receipt length.
pub const MAX_RECEIPT_LEN: usize = 40;

/// `<prefix>_<truncated user id>_<creation time in ms>`, at most 40 characters.
///
/// Only unique down to the millisecond per user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt(String);

impl Receipt {
    /// Derive the receipt for `user_id` created at `timestamp_millis`.
    pub fn generate(user_id: &str, timestamp_millis: i64) -> Self {
        let user_part: String = user_id.chars().take(RECEIPT_USER_ID_LEN).collect();
        let receipt: String = format!("{}_{}_{}", RECEIPT_PREFIX, user_part, timestamp_millis)
            .chars()
            .take(MAX_RECEIPT_LEN)
            .collect();
        Receipt(receipt)
    }

    /// Derive the receipt for `user_id` at the current wall-clock time.
    pub fn now(user_id: &str) -> Self {
        Self::generate(user_id, chrono::Utc::now().timestamp_millis())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
