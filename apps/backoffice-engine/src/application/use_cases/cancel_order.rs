//! Cancel Order Use Case
//!
//! Customer-initiated cancellation. Unlike the back-office transition
//! path, this checks that the requester owns the order and reports
//! non-cancellable states with a dedicated error.

use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::application::errors::ProcessingError;
use crate::domain::catalog::ProductRepository;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{OrderId, UserId};

/// Use case for a customer cancelling their own order.
pub struct CancelOrderUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    product_repo: Arc<P>,
    order_repo: Arc<O>,
}

impl<P, O> CancelOrderUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    /// Create a new `CancelOrderUseCase`.
    pub const fn new(product_repo: Arc<P>, order_repo: Arc<O>) -> Self {
        Self {
            product_repo,
            order_repo,
        }
    }

    /// Cancel an order on behalf of its owner.
    ///
    /// Only `PENDING` and `PAID` orders can be cancelled. Stock for
    /// every line is restored; lines whose product no longer exists are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns error if the order is missing, `user_id` does not own
    /// it, the order is past the cancellable states, or persistence
    /// fails.
    pub async fn cancel(
        &self,
        order_id: &OrderId,
        user_id: &UserId,
    ) -> Result<OrderDto, ProcessingError> {
        let mut order = self
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

        if !order.status().is_cancellable() {
            return Err(OrderError::NotCancellable {
                status: order.status(),
            }
            .into());
        }

        order.cancel()?;

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

        self.order_repo.save(&order).await?;

        tracing::info!(order_id = %order_id, user_id = %user_id, "Order cancelled by owner");

        Ok(OrderDto::from_order(&order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::aggregate::{Product, RegisterProductCommand};
    use crate::domain::ordering::aggregate::{Order, OrderLine, PlaceOrderCommand};
    use crate::domain::ordering::value_objects::{OrderStatus, ShippingAddress};
    use crate::domain::shared::{Money, ProductId, Quantity};
    use crate::infrastructure::persistence::in_memory::{
        InMemoryOrderRepository, InMemoryProductRepository,
    };
    use rust_decimal_macros::dec;

    fn order_for(user: &str, product_id: ProductId, quantity: u32) -> Order {
        Order::place(PlaceOrderCommand {
            user_id: UserId::new(user),
            lines: vec![OrderLine::new(
                product_id,
                Quantity::new(quantity),
                Money::new(dec!(5.00)),
            )],
            shipping_address: ShippingAddress::new("1 Main St").unwrap(),
            phone_number: "555-0100".to_string(),
        })
        .unwrap()
    }

    fn use_case() -> (
        Arc<InMemoryProductRepository>,
        Arc<InMemoryOrderRepository>,
        CancelOrderUseCase<InMemoryProductRepository, InMemoryOrderRepository>,
    ) {
        let products = Arc::new(InMemoryProductRepository::new());
        let orders = Arc::new(InMemoryOrderRepository::new());
        let uc = CancelOrderUseCase::new(products.clone(), orders.clone());
        (products, orders, uc)
    }

    #[tokio::test]
    async fn owner_cancels_pending_order_and_stock_returns() {
        let (products, orders, uc) = use_case();
        let mut product = Product::register(RegisterProductCommand {
            name: "Widget".to_string(),
            unit_price: Money::new(dec!(5.00)),
            category: "tools".to_string(),
            stock: Quantity::new(10),
            description: String::new(),
        })
        .unwrap();
        product.deduct(Quantity::new(4)).unwrap();
        let product_id = product.id().clone();
        products.save(&product).await.unwrap();

        let order = order_for("user-1", product_id.clone(), 4);
        let order_id = order.id().clone();
        orders.save(&order).await.unwrap();

        let dto = uc.cancel(&order_id, &UserId::new("user-1")).await.unwrap();
        assert_eq!(dto.status, OrderStatus::Cancelled);

        let product = products.find_by_id(&product_id).await.unwrap().unwrap();
        assert_eq!(product.stock(), Quantity::new(10));
    }

    #[tokio::test]
    async fn non_owner_is_rejected() {
        let (_products, orders, uc) = use_case();
        let order = order_for("user-1", ProductId::new("p-1"), 1);
        let order_id = order.id().clone();
        orders.save(&order).await.unwrap();

        let result = uc.cancel(&order_id, &UserId::new("intruder")).await;

        assert!(matches!(
            result,
            Err(ProcessingError::Order(OrderError::Unauthorized { .. }))
        ));

        let stored = orders.find_by_id(&order_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), OrderStatus::Pending);
    }

    #[tokio::test]
    async fn shipped_order_is_not_cancellable() {
        let (_products, orders, uc) = use_case();
        let mut order = order_for("user-1", ProductId::new("p-1"), 1);
        order.mark_paid().unwrap();
        order.mark_shipped().unwrap();
        let order_id = order.id().clone();
        orders.save(&order).await.unwrap();

        let result = uc.cancel(&order_id, &UserId::new("user-1")).await;

        assert!(matches!(
            result,
            Err(ProcessingError::Order(OrderError::NotCancellable {
                status: OrderStatus::Shipping,
            }))
        ));
    }

    #[tokio::test]
    async fn missing_order_is_reported() {
        let (_products, _orders, uc) = use_case();

        let result = uc
            .cancel(&OrderId::new("ghost"), &UserId::new("user-1"))
            .await;

        assert!(matches!(
            result,
            Err(ProcessingError::Order(OrderError::NotFound { .. }))
        ));
    }
}
