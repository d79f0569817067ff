//! In-memory repository adapters.
//!
//! Backing store for tests and development, and the production home of
//! carts, which are session-scoped and never written to disk.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::cart::aggregate::Cart;
use crate::domain::cart::{CartError, CartRepository};
use crate::domain::catalog::aggregate::Product;
use crate::domain::catalog::{CatalogError, ProductRepository};
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{OrderId, ProductId, UserId};

/// In-memory implementation of `ProductRepository`.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of products in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all products from the repository.
    pub fn clear(&self) {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Add a product to the repository (for test setup).
    pub fn add(&self, product: Product) {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product.id().to_string(), product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> Result<(), CatalogError> {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product.id().to_string(), product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Ok(products.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(all)
    }

    async fn exists(&self, id: &ProductId) -> Result<bool, CatalogError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Ok(products.contains_key(id.as_str()))
    }
}

/// In-memory implementation of `CartRepository`.
///
/// Carts are keyed by user; there is at most one per user.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCartRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of carts in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all carts from the repository.
    pub fn clear(&self) {
        self.carts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn save(&self, cart: &Cart) -> Result<(), CartError> {
        self.carts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(cart.user_id().to_string(), cart.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, CartError> {
        let carts = self.carts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(carts.get(user_id.as_str()).cloned())
    }
}

/// In-memory implementation of `OrderRepository`.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of orders in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all orders from the repository.
    pub fn clear(&self) {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Add an order to the repository (for test setup).
    pub fn add(&self, order: Order) {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(order.id().to_string(), order);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), OrderError> {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(order.id().to_string(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);
        Ok(orders.get(id.as_str()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);
        let mut mine: Vec<Order> = orders
            .values()
            .filter(|o| o.user_id() == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.order_date().cmp(&a.order_date()));
        Ok(mine)
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);
        Ok(orders
            .values()
            .filter(|o| o.status() == status)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);
        Ok(orders.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::aggregate::RegisterProductCommand;
    use crate::domain::ordering::aggregate::{OrderLine, PlaceOrderCommand};
    use crate::domain::ordering::value_objects::ShippingAddress;
    use crate::domain::shared::{Money, Quantity};
    use rust_decimal_macros::dec;

    fn widget(name: &str) -> Product {
        Product::register(RegisterProductCommand {
            name: name.to_string(),
            unit_price: Money::new(dec!(1.00)),
            category: "tools".to_string(),
            stock: Quantity::new(5),
            description: String::new(),
        })
        .unwrap()
    }

    fn order_for(user: &str) -> Order {
        Order::place(PlaceOrderCommand {
            user_id: UserId::new(user),
            lines: vec![OrderLine::new(
                ProductId::new("p-1"),
                Quantity::new(1),
                Money::new(dec!(1.00)),
            )],
            shipping_address: ShippingAddress::new("1 Main St").unwrap(),
            phone_number: "555-0100".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn product_save_and_find() {
        let repo = InMemoryProductRepository::new();
        let product = widget("Widget");
        let id = product.id().clone();

        repo.save(&product).await.unwrap();

        assert!(repo.exists(&id).await.unwrap());
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name(), "Widget");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn product_save_overwrites() {
        let repo = InMemoryProductRepository::new();
        let mut product = widget("Widget");
        repo.save(&product).await.unwrap();

        product.set_unit_price(Money::new(dec!(2.00))).unwrap();
        repo.save(&product).await.unwrap();

        assert_eq!(repo.len(), 1);
        let found = repo.find_by_id(product.id()).await.unwrap().unwrap();
        assert_eq!(found.unit_price().amount(), dec!(2.00));
    }

    #[tokio::test]
    async fn cart_is_keyed_by_user() {
        let repo = InMemoryCartRepository::new();
        let user = UserId::new("user-1");
        let mut cart = Cart::new(user.clone());
        cart.add_item(ProductId::new("p-1"), Quantity::new(2)).unwrap();

        repo.save(&cart).await.unwrap();

        let found = repo.find_by_user(&user).await.unwrap().unwrap();
        assert_eq!(found.items().len(), 1);
        assert!(repo.find_by_user(&UserId::new("other")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn order_queries() {
        let repo = InMemoryOrderRepository::new();
        let order1 = order_for("user-1");
        let mut order2 = order_for("user-1");
        order2.mark_paid().unwrap();
        let order3 = order_for("user-2");

        repo.save(&order1).await.unwrap();
        repo.save(&order2).await.unwrap();
        repo.save(&order3).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 3);
        assert_eq!(
            repo.find_by_user(&UserId::new("user-1")).await.unwrap().len(),
            2
        );
        let paid = repo.find_by_status(OrderStatus::Paid).await.unwrap();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].id(), order2.id());
    }

    #[tokio::test]
    async fn clear_empties_repositories() {
        let repo = InMemoryOrderRepository::new();
        repo.add(order_for("user-1"));
        assert!(!repo.is_empty());

        repo.clear();
        assert!(repo.is_empty());
    }
}
