//! Mock order processor for testing.
//!
//! Records every request it receives and answers with a configurable order id
//! or error, so tests can assert both what reached the processor and whether
//! anything did.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{OrderProcessor, ProcessorError, ProcessorOrder, ProcessorOrderRequest};

/// Mock order processor for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockOrderProcessor::returning("order_123");
/// let order = mock.create_order(request).await?;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockOrderProcessor {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Order id to return; a generated one when unset.
    order_id: Option<String>,

    /// Error to return instead of an order.
    error: Option<ProcessorError>,

    /// Every request received, in order.
    calls: Vec<ProcessorOrderRequest>,
}

impl MockOrderProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that always answers with `order_id`.
    pub fn returning(order_id: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_order_id(order_id);
        mock
    }

    /// A mock that always fails with `error`.
    pub fn failing(error: ProcessorError) -> Self {
        let mock = Self::new();
        mock.set_error(error);
        mock
    }

    pub fn set_order_id(&self, order_id: impl Into<String>) {
        self.state().order_id = Some(order_id.into());
    }

    pub fn set_error(&self, error: ProcessorError) {
        self.state().error = Some(error);
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<ProcessorOrderRequest> {
        self.state().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A panicking test must not poison the mock for the assertions after it.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl OrderProcessor for MockOrderProcessor {
    async fn create_order(
        &self,
        request: ProcessorOrderRequest,
    ) -> Result<ProcessorOrder, ProcessorError> {
        let mut state = self.state();
        state.calls.push(request.clone());

        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        let id = state
            .order_id
            .clone()
            .unwrap_or_else(|| format!("order_mock_{}", state.calls.len()));

        Ok(ProcessorOrder {
            entity: Some("order".to_string()),
            amount: Some(request.amount),
            currency: Some(request.currency),
            receipt: Some(request.receipt),
            status: Some("created".to_string()),
            created_at: Some(chrono::Utc::now().timestamp()),
            ..ProcessorOrder::with_id(id)
        })
    }
}
