//! Order Queries Use Case
//!
//! Read-only views over the order book.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::dto::{OrderDto, OrderStatisticsDto};
use crate::application::errors::ProcessingError;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{OrderId, UserId};

/// Use case for querying orders and order-book statistics.
pub struct OrderQueriesUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> OrderQueriesUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `OrderQueriesUseCase`.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Fetch a single order (back-office path, no ownership check).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist.
    pub async fn get_order(&self, order_id: &OrderId) -> Result<OrderDto, ProcessingError> {
        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        Ok(OrderDto::from_order(&order))
    }

    /// Fetch a single order on behalf of a user, enforcing ownership.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist and
    /// `Unauthorized` if `user_id` does not own it.
    pub async fn get_order_for_user(
        &self,
        order_id: &OrderId,
        user_id: &UserId,
    ) -> Result<OrderDto, ProcessingError> {
        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;

        if order.user_id() != user_id {
            return Err(OrderError::Unauthorized {
                order_id: order_id.to_string(),
                user_id: user_id.to_string(),
            }
            .into());
        }

        Ok(OrderDto::from_order(&order))
    }

    /// List a user's orders.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    pub async fn orders_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<OrderDto>, ProcessingError> {
        let orders = self.order_repo.find_by_user(user_id).await?;
        Ok(orders.iter().map(OrderDto::from_order).collect())
    }

    /// List all orders in a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    pub async fn orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<OrderDto>, ProcessingError> {
        let orders = self.order_repo.find_by_status(status).await?;
        Ok(orders.iter().map(OrderDto::from_order).collect())
    }

    /// Compute order-book statistics, optionally scoped to one user.
    ///
    /// Revenue sums the totals of non-cancelled orders.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    pub async fn statistics(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<OrderStatisticsDto, ProcessingError> {
        let orders = match user_id {
            Some(user_id) => self.order_repo.find_by_user(user_id).await?,
            None => self.order_repo.find_all().await?,
        };

        let mut stats = OrderStatisticsDto {
            total_orders: orders.len(),
            pending: 0,
            paid: 0,
            shipping: 0,
            delivered: 0,
            cancelled: 0,
            total_revenue: Decimal::ZERO,
        };

        for order in &orders {
            match order.status() {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Paid => stats.paid += 1,
                OrderStatus::Shipping => stats.shipping += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
            if order.status() != OrderStatus::Cancelled {
                stats.total_revenue += order.total_amount().amount();
            }
        }

        Ok(stats)
    }
}
