//! CreateOrderHandler - Command handler for creating a processor order.

use std::sync::Arc;

use crate::config::PaymentConfig;
use crate::domain::checkout::{CheckoutError, OrderCreationRequest, Receipt};
use crate::ports::{OrderProcessor, ProcessorOrderRequest};

/// Command to create an order on behalf of a user.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub order: OrderCreationRequest,
}

/// Result of successful order creation.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    /// Processor-issued order id, unchanged.
    pub order_id: String,
    pub receipt: Receipt,
}

/// Handler for order creation.
///
/// Validates the request, checks that processor credentials are configured,
/// and only then makes exactly one call to the processor.
pub struct CreateOrderHandler {
    processor: Arc<dyn OrderProcessor>,
    config: Arc<PaymentConfig>,
}

impl CreateOrderHandler {
    pub fn new(processor: Arc<dyn OrderProcessor>, config: Arc<PaymentConfig>) -> Self {
        Self { processor, config }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, CheckoutError> {
        // 1. Validate client input
        let order = cmd.order.validate().map_err(|err| {
            tracing::info!(field = err.field(), error = %err, "Rejected order request");
            err
        })?;

        // 2. Check server configuration
        if let Some(missing) = self.config.missing_credential() {
            tracing::error!(missing, "Cannot create order: payment credentials not configured");
            return Err(CheckoutError::configuration(missing));
        }

        // 3. Build the normalized processor request
        let receipt = Receipt::now(&order.user_id);
        let request = ProcessorOrderRequest {
            amount: order.amount,
            currency: order.currency.clone(),
            receipt: receipt.to_string(),
            notes: order.notes(),
        };

        // 4. Create the order
        let created = self.processor.create_order(request).await.map_err(|err| {
            tracing::warn!(
                kind = %err.kind,
                code = err.details.code.as_deref().unwrap_or("unknown"),
                receipt = %receipt,
                "Order creation failed at payment processor"
            );
            CheckoutError::from(err)
        })?;

        tracing::info!(
            order_id = %created.id,
            receipt = %receipt,
            amount = order.amount,
            currency = %order.currency,
            "Order created"
        );

        Ok(CreateOrderResult {
            order_id: created.id,
            receipt,
        })
    }
}
