//! Place Order Use Case
//!
//! Checkout orchestration: validates every requested line against the
//! catalog before any stock is touched, deducts stock, snapshots
//! prices into order lines, and clears the cart.

use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::application::errors::ProcessingError;
use crate::domain::cart::CartRepository;
use crate::domain::catalog::aggregate::Product;
use crate::domain::catalog::{CatalogError, ProductRepository};
use crate::domain::ordering::aggregate::{Order, OrderLine, PlaceOrderCommand};
use crate::domain::ordering::value_objects::ShippingAddress;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{ProductId, Quantity, UserId};

/// Use case for placing orders, from a cart or directly.
pub struct PlaceOrderUseCase<P, C, O>
where
    P: ProductRepository,
    C: CartRepository,
    O: OrderRepository,
{
    product_repo: Arc<P>,
    cart_repo: Arc<C>,
    order_repo: Arc<O>,
}

impl<P, C, O> PlaceOrderUseCase<P, C, O>
where
    P: ProductRepository,
    C: CartRepository,
    O: OrderRepository,
{
    /// Create a new `PlaceOrderUseCase`.
    pub const fn new(product_repo: Arc<P>, cart_repo: Arc<C>, order_repo: Arc<O>) -> Self {
        Self {
            product_repo,
            cart_repo,
            order_repo,
        }
    }

    /// Check out a user's cart into a new `PENDING` order.
    ///
    /// All lines are validated against the catalog first; stock is
    /// deducted only after every line has passed, so a failure on any
    /// line leaves the catalog untouched. On success the cart is
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns error if the cart is empty, a product is missing, stock
    /// is insufficient for any line, or persistence fails.
    pub async fn create_from_cart(
        &self,
        user_id: &UserId,
        shipping_address: ShippingAddress,
        phone_number: String,
    ) -> Result<OrderDto, ProcessingError> {
        let mut cart = self
            .cart_repo
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| OrderError::EmptyCart {
                user_id: user_id.to_string(),
            })?;

        if cart.is_empty() {
            return Err(OrderError::EmptyCart {
                user_id: user_id.to_string(),
            }
            .into());
        }

        let requested: Vec<(ProductId, Quantity)> = cart
            .items()
            .iter()
            .map(|item| (item.product_id().clone(), item.quantity()))
            .collect();

        let order = self
            .place_validated(user_id, &requested, shipping_address, phone_number)
            .await?;

        cart.clear();
        self.cart_repo.save(&cart).await?;

        tracing::info!(
            order_id = %order.id(),
            user_id = %user_id,
            lines = order.lines().len(),
            total = %order.total_amount(),
            "Order placed from cart"
        );

        Ok(OrderDto::from_order(&order))
    }

    /// Place a single-product order, bypassing the cart.
    ///
    /// # Errors
    ///
    /// Returns error if the product is missing, stock is insufficient,
    /// or persistence fails.
    pub async fn create_direct(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: Quantity,
        shipping_address: ShippingAddress,
        phone_number: String,
    ) -> Result<OrderDto, ProcessingError> {
        if quantity.is_zero() {
            return Err(CatalogError::InvalidQuantity {
                message: "Ordered quantity must be positive".to_string(),
            }
            .into());
        }

        let requested = vec![(product_id.clone(), quantity)];
        let order = self
            .place_validated(user_id, &requested, shipping_address, phone_number)
            .await?;

        tracing::info!(
            order_id = %order.id(),
            user_id = %user_id,
            product_id = %product_id,
            "Direct order placed"
        );

        Ok(OrderDto::from_order(&order))
    }

    /// Validate every requested line, then deduct stock and persist.
    ///
    /// Validation happens over a single load of each product, so the
    /// stock deducted is the stock that was checked.
    async fn place_validated(
        &self,
        user_id: &UserId,
        requested: &[(ProductId, Quantity)],
        shipping_address: ShippingAddress,
        phone_number: String,
    ) -> Result<Order, ProcessingError> {
        // Phase 1: load and validate all lines. No writes yet.
        let mut products: Vec<(Product, Quantity)> = Vec::with_capacity(requested.len());
        let mut lines: Vec<OrderLine> = Vec::with_capacity(requested.len());

        for (product_id, quantity) in requested {
            let product = self
                .product_repo
                .find_by_id(product_id)
                .await?
                .ok_or_else(|| CatalogError::ProductNotFound {
                    product_id: product_id.to_string(),
                })?;

            if !product.is_available(*quantity) {
                return Err(CatalogError::InsufficientStock {
                    product_id: product_id.to_string(),
                    requested: *quantity,
                    available: product.stock(),
                }
                .into());
            }

            lines.push(OrderLine::new(
                product_id.clone(),
                *quantity,
                product.unit_price(),
            ));
            products.push((product, *quantity));
        }

        // Phase 2: every line passed, commit the deductions.
        for (product, quantity) in &mut products {
            product.deduct(*quantity)?;
            self.product_repo.save(product).await?;
        }

        let order = Order::place(PlaceOrderCommand {
            user_id: user_id.clone(),
            lines,
            shipping_address,
            phone_number,
        })?;

        self.order_repo.save(&order).await?;

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::aggregate::Cart;
    use crate::domain::catalog::aggregate::RegisterProductCommand;
    use crate::domain::ordering::value_objects::OrderStatus;
    use crate::domain::shared::Money;
    use crate::infrastructure::persistence::in_memory::{
        InMemoryCartRepository, InMemoryOrderRepository, InMemoryProductRepository,
    };
    use rust_decimal_macros::dec;

    fn widget(stock: u32, price: rust_decimal::Decimal) -> Product {
        Product::register(RegisterProductCommand {
            name: "Widget".to_string(),
            unit_price: Money::new(price),
            category: "tools".to_string(),
            stock: Quantity::new(stock),
            description: String::new(),
        })
        .unwrap()
    }

    fn address() -> ShippingAddress {
        ShippingAddress::new("1 Main St").unwrap()
    }

    fn use_case() -> (
        Arc<InMemoryProductRepository>,
        Arc<InMemoryCartRepository>,
        Arc<InMemoryOrderRepository>,
        PlaceOrderUseCase<
            InMemoryProductRepository,
            InMemoryCartRepository,
            InMemoryOrderRepository,
        >,
    ) {
        let products = Arc::new(InMemoryProductRepository::new());
        let carts = Arc::new(InMemoryCartRepository::new());
        let orders = Arc::new(InMemoryOrderRepository::new());
        let uc = PlaceOrderUseCase::new(products.clone(), carts.clone(), orders.clone());
        (products, carts, orders, uc)
    }

    #[tokio::test]
    async fn checkout_deducts_stock_and_clears_cart() {
        let (products, carts, orders, uc) = use_case();
        let product = widget(10, dec!(5.00));
        let product_id = product.id().clone();
        products.save(&product).await.unwrap();

        let user = UserId::new("user-1");
        let mut cart = Cart::new(user.clone());
        cart.add_item(product_id.clone(), Quantity::new(3)).unwrap();
        carts.save(&cart).await.unwrap();

        let dto = uc
            .create_from_cart(&user, address(), "555-0100".to_string())
            .await
            .unwrap();

        assert_eq!(dto.status, OrderStatus::Pending);
        assert_eq!(dto.total_amount, dec!(15.00));

        let remaining = products.find_by_id(&product_id).await.unwrap().unwrap();
        assert_eq!(remaining.stock(), Quantity::new(7));

        let cart = carts.find_by_user(&user).await.unwrap().unwrap();
        assert!(cart.is_empty());

        assert_eq!(orders.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn checkout_empty_cart_is_rejected() {
        let (_products, carts, _orders, uc) = use_case();
        let user = UserId::new("user-1");
        carts.save(&Cart::new(user.clone())).await.unwrap();

        let result = uc
            .create_from_cart(&user, address(), "555-0100".to_string())
            .await;

        assert!(matches!(
            result,
            Err(ProcessingError::Order(OrderError::EmptyCart { .. }))
        ));
    }

    #[tokio::test]
    async fn checkout_without_cart_is_rejected() {
        let (_products, _carts, _orders, uc) = use_case();

        let result = uc
            .create_from_cart(&UserId::new("ghost"), address(), "555-0100".to_string())
            .await;

        assert!(matches!(
            result,
            Err(ProcessingError::Order(OrderError::EmptyCart { .. }))
        ));
    }

    #[tokio::test]
    async fn one_short_line_leaves_all_stock_untouched() {
        let (products, carts, orders, uc) = use_case();
        let plentiful = widget(100, dec!(1.00));
        let scarce = widget(1, dec!(2.00));
        let plentiful_id = plentiful.id().clone();
        let scarce_id = scarce.id().clone();
        products.save(&plentiful).await.unwrap();
        products.save(&scarce).await.unwrap();

        let user = UserId::new("user-1");
        let mut cart = Cart::new(user.clone());
        cart.add_item(plentiful_id.clone(), Quantity::new(5)).unwrap();
        cart.add_item(scarce_id.clone(), Quantity::new(3)).unwrap();
        carts.save(&cart).await.unwrap();

        let result = uc
            .create_from_cart(&user, address(), "555-0100".to_string())
            .await;

        assert!(matches!(
            result,
            Err(ProcessingError::Catalog(CatalogError::InsufficientStock { .. }))
        ));

        // No deduction happened on any line, no order was created, and
        // the cart kept its lines.
        let p = products.find_by_id(&plentiful_id).await.unwrap().unwrap();
        assert_eq!(p.stock(), Quantity::new(100));
        let s = products.find_by_id(&scarce_id).await.unwrap().unwrap();
        assert_eq!(s.stock(), Quantity::new(1));
        assert!(orders.find_all().await.unwrap().is_empty());
        let cart = carts.find_by_user(&user).await.unwrap().unwrap();
        assert_eq!(cart.items().len(), 2);
    }

    #[tokio::test]
    async fn missing_product_fails_checkout() {
        let (_products, carts, _orders, uc) = use_case();
        let user = UserId::new("user-1");
        let mut cart = Cart::new(user.clone());
        cart.add_item(ProductId::new("ghost"), Quantity::new(1)).unwrap();
        carts.save(&cart).await.unwrap();

        let result = uc
            .create_from_cart(&user, address(), "555-0100".to_string())
            .await;

        assert!(matches!(
            result,
            Err(ProcessingError::Catalog(CatalogError::ProductNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn order_lines_snapshot_the_checkout_price() {
        let (products, carts, _orders, uc) = use_case();
        let mut product = widget(10, dec!(5.00));
        let product_id = product.id().clone();
        products.save(&product).await.unwrap();

        let user = UserId::new("user-1");
        let mut cart = Cart::new(user.clone());
        cart.add_item(product_id.clone(), Quantity::new(2)).unwrap();
        carts.save(&cart).await.unwrap();

        let dto = uc
            .create_from_cart(&user, address(), "555-0100".to_string())
            .await
            .unwrap();

        // Later price change does not affect the placed order.
        product.set_unit_price(Money::new(dec!(9.00))).unwrap();
        products.save(&product).await.unwrap();

        assert_eq!(dto.lines[0].unit_price, dec!(5.00));
        assert_eq!(dto.total_amount, dec!(10.00));
    }

    #[tokio::test]
    async fn direct_order_deducts_stock() {
        let (products, _carts, orders, uc) = use_case();
        let product = widget(4, dec!(2.50));
        let product_id = product.id().clone();
        products.save(&product).await.unwrap();

        let dto = uc
            .create_direct(
                &UserId::new("user-1"),
                &product_id,
                Quantity::new(4),
                address(),
                "555-0100".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(dto.total_amount, dec!(10.00));
        let remaining = products.find_by_id(&product_id).await.unwrap().unwrap();
        assert_eq!(remaining.stock(), Quantity::ZERO);
        assert_eq!(orders.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn direct_order_insufficient_stock() {
        let (products, _carts, _orders, uc) = use_case();
        let product = widget(1, dec!(2.50));
        let product_id = product.id().clone();
        products.save(&product).await.unwrap();

        let result = uc
            .create_direct(
                &UserId::new("user-1"),
                &product_id,
                Quantity::new(2),
                address(),
                "555-0100".to_string(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ProcessingError::Catalog(CatalogError::InsufficientStock { requested, available, .. }))
                if requested == Quantity::new(2) && available == Quantity::new(1)
        ));
    }
}
