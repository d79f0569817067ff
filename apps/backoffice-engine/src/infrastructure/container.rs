//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components. Built
//! once at startup from the configuration; use cases are constructed
//! on demand and share the repository handles.

use std::sync::Arc;

use crate::application::use_cases::{
    CancelOrderUseCase, ManageCartUseCase, OrderQueriesUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};
use crate::config::PersistenceConfig;
use crate::domain::cart::CartRepository;
use crate::domain::catalog::ProductRepository;
use crate::domain::ordering::OrderRepository;
use crate::infrastructure::persistence::flat_file::{
    FlatFileOrderRepository, FlatFileProductRepository,
};
use crate::infrastructure::persistence::in_memory::{
    InMemoryCartRepository, InMemoryOrderRepository, InMemoryProductRepository,
};

/// Dependency injection container.
///
/// Holds the wired repository handles. Construct with specific
/// implementations via `new`, or use the `file_backed` / `in_memory`
/// presets.
pub struct Container<P, C, O>
where
    P: ProductRepository + 'static,
    C: CartRepository + 'static,
    O: OrderRepository + 'static,
{
    product_repo: Arc<P>,
    cart_repo: Arc<C>,
    order_repo: Arc<O>,
}

/// The production wiring: flat files for products and orders, memory
/// for session-scoped carts.
pub type FileBackedContainer =
    Container<FlatFileProductRepository, InMemoryCartRepository, FlatFileOrderRepository>;

/// Fully in-memory wiring for tests and development.
pub type InMemoryContainer =
    Container<InMemoryProductRepository, InMemoryCartRepository, InMemoryOrderRepository>;

impl FileBackedContainer {
    /// Wire the production repositories from the persistence config.
    #[must_use]
    pub fn file_backed(persistence: &PersistenceConfig) -> Self {
        Self::new(
            Arc::new(FlatFileProductRepository::new(persistence.products_path())),
            Arc::new(InMemoryCartRepository::new()),
            Arc::new(FlatFileOrderRepository::new(
                persistence.orders_path(),
                persistence.order_items_path(),
            )),
        )
    }
}

impl InMemoryContainer {
    /// Wire fully in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryCartRepository::new()),
            Arc::new(InMemoryOrderRepository::new()),
        )
    }
}

impl<P, C, O> Container<P, C, O>
where
    P: ProductRepository + 'static,
    C: CartRepository + 'static,
    O: OrderRepository + 'static,
{
    /// Create a new container with all dependencies.
    pub fn new(product_repo: Arc<P>, cart_repo: Arc<C>, order_repo: Arc<O>) -> Self {
        Self {
            product_repo,
            cart_repo,
            order_repo,
        }
    }

    /// Get the product repository.
    pub fn product_repo(&self) -> Arc<P> {
        Arc::clone(&self.product_repo)
    }

    /// Get the cart repository.
    pub fn cart_repo(&self) -> Arc<C> {
        Arc::clone(&self.cart_repo)
    }

    /// Get the order repository.
    pub fn order_repo(&self) -> Arc<O> {
        Arc::clone(&self.order_repo)
    }

    /// Create a `PlaceOrderUseCase`.
    pub fn place_order_use_case(&self) -> PlaceOrderUseCase<P, C, O> {
        PlaceOrderUseCase::new(
            Arc::clone(&self.product_repo),
            Arc::clone(&self.cart_repo),
            Arc::clone(&self.order_repo),
        )
    }

    /// Create a `ManageCartUseCase`.
    pub fn manage_cart_use_case(&self) -> ManageCartUseCase<P, C> {
        ManageCartUseCase::new(Arc::clone(&self.product_repo), Arc::clone(&self.cart_repo))
    }

    /// Create an `UpdateOrderStatusUseCase`.
    pub fn update_order_status_use_case(&self) -> UpdateOrderStatusUseCase<P, O> {
        UpdateOrderStatusUseCase::new(Arc::clone(&self.product_repo), Arc::clone(&self.order_repo))
    }

    /// Create a `CancelOrderUseCase`.
    pub fn cancel_order_use_case(&self) -> CancelOrderUseCase<P, O> {
        CancelOrderUseCase::new(Arc::clone(&self.product_repo), Arc::clone(&self.order_repo))
    }

    /// Create an `OrderQueriesUseCase`.
    pub fn order_queries_use_case(&self) -> OrderQueriesUseCase<O> {
        OrderQueriesUseCase::new(Arc::clone(&self.order_repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::aggregate::{Product, RegisterProductCommand};
    use crate::domain::shared::{Money, Quantity, UserId};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn in_memory_container_wires_shared_repositories() {
        let container = Container::in_memory();

        let product = Product::register(RegisterProductCommand {
            name: "Widget".to_string(),
            unit_price: Money::new(dec!(2.00)),
            category: "tools".to_string(),
            stock: Quantity::new(5),
            description: String::new(),
        })
        .unwrap();
        let product_id = product.id().clone();
        container.product_repo().add(product);

        let cart_uc = container.manage_cart_use_case();
        let user = UserId::new("user-1");
        cart_uc
            .add_to_cart(&user, &product_id, Quantity::new(2))
            .await
            .unwrap();

        // A second use case built from the same container sees the cart.
        let view = container
            .manage_cart_use_case()
            .view_cart(&user)
            .await
            .unwrap();
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn file_backed_container_uses_config_paths() {
        let persistence = PersistenceConfig::default();
        let _container = Container::file_backed(&persistence);
    }
}
