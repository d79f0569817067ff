//! Update Order Status Use Case
//!
//! Back-office status transitions. Cancellation restores the deducted
//! stock line by line; a product deleted since the order was placed is
//! logged and skipped rather than failing the whole cancellation.

use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::application::errors::ProcessingError;
use crate::domain::catalog::ProductRepository;
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::OrderId;

/// Use case for moving orders through their lifecycle.
pub struct UpdateOrderStatusUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    product_repo: Arc<P>,
    order_repo: Arc<O>,
}

impl<P, O> UpdateOrderStatusUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    /// Create a new `UpdateOrderStatusUseCase`.
    pub const fn new(product_repo: Arc<P>, order_repo: Arc<O>) -> Self {
        Self {
            product_repo,
            order_repo,
        }
    }

    /// Transition an order to `new_status`.
    ///
    /// When the target is `CANCELLED`, stock for every line is restored
    /// before the order is saved.
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing, the transition is not in
    /// the state machine's table, or persistence fails.
    pub async fn transition(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
    ) -> Result<OrderDto, ProcessingError> {
        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        let previous = order.status();
        order.transition_to(new_status)?;

        if new_status == OrderStatus::Cancelled {
            self.restore_stock(&order).await?;
        }

        self.order_repo.save(&order).await?;

        tracing::info!(
            order_id = %order_id,
            from = %previous,
            to = %new_status,
            "Order status updated"
        );

        Ok(OrderDto::from_order(&order))
    }

    /// Mark an order paid.
    ///
    /// # Errors
    ///
    /// Returns error unless the order exists and is `PENDING`.
    pub async fn mark_paid(&self, order_id: &OrderId) -> Result<OrderDto, ProcessingError> {
        self.transition(order_id, OrderStatus::Paid).await
    }

    /// Mark an order shipped.
    ///
    /// # Errors
    ///
    /// Returns error unless the order exists and is `PAID`.
    pub async fn mark_shipped(&self, order_id: &OrderId) -> Result<OrderDto, ProcessingError> {
        self.transition(order_id, OrderStatus::Shipping).await
    }

    /// Mark an order delivered.
    ///
    /// # Errors
    ///
    /// Returns error unless the order exists and is `SHIPPING`.
    pub async fn mark_delivered(&self, order_id: &OrderId) -> Result<OrderDto, ProcessingError> {
        self.transition(order_id, OrderStatus::Delivered).await
    }

    /// Return each line's units to the catalog.
    ///
    /// Lines whose product no longer exists are skipped with a warning;
    /// the remaining lines still restore.
    async fn restore_stock(&self, order: &Order) -> Result<(), ProcessingError> {
        for line in order.lines() {
            let Some(mut product) = self.product_repo.find_by_id(line.product_id()).await? else {
                tracing::warn!(
                    order_id = %order.id(),
                    product_id = %line.product_id(),
                    quantity = %line.quantity(),
                    "Product missing during stock restore, line skipped"
                );
                continue;
            };

            product.restore(line.quantity())?;
            self.product_repo.save(&product).await?;
        }

        Ok(())
    }
}
