//! Manage Cart Use Case
//!
//! Cart mutations with catalog pre-checks. The cart never reserves
//! stock; checks here are advisory and checkout revalidates.

use std::sync::Arc;

use crate::application::dto::CartDto;
use crate::application::errors::ProcessingError;
use crate::domain::cart::aggregate::Cart;
use crate::domain::cart::CartRepository;
use crate::domain::catalog::{CatalogError, ProductRepository};
use crate::domain::shared::{ProductId, Quantity, UserId};

/// Use case for cart mutations and the cart view.
pub struct ManageCartUseCase<P, C>
where
    P: ProductRepository,
    C: CartRepository,
{
    product_repo: Arc<P>,
    cart_repo: Arc<C>,
}

impl<P, C> ManageCartUseCase<P, C>
where
    P: ProductRepository,
    C: CartRepository,
{
    /// Create a new `ManageCartUseCase`.
    pub const fn new(product_repo: Arc<P>, cart_repo: Arc<C>) -> Self {
        Self {
            product_repo,
            cart_repo,
        }
    }

    /// Add units of a product to the user's cart.
    ///
    /// Creates the cart lazily on first use. A line for the same
    /// product merges by summing quantities.
    ///
    /// # Errors
    ///
    /// Returns error if the product is missing, the added quantity
    /// exceeds current stock, or persistence fails.
    pub async fn add_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<(), ProcessingError> {
        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound {
                product_id: product_id.to_string(),
            })?;

        if !product.is_available(quantity) {
            return Err(CatalogError::InsufficientStock {
                product_id: product_id.to_string(),
                requested: quantity,
                available: product.stock(),
            }
            .into());
        }

        let mut cart = self
            .cart_repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| Cart::new(user_id.clone()));

        cart.add_item(product_id.clone(), quantity)?;
        self.cart_repo.save(&cart).await?;

        tracing::debug!(
            user_id = %user_id,
            product_id = %product_id,
            quantity = %quantity,
            "Added to cart"
        );

        Ok(())
    }

    /// Remove the line for a product from the user's cart.
    ///
    /// # Errors
    ///
    /// Returns error if the cart has no line for the product or
    /// persistence fails.
    pub async fn remove_from_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), ProcessingError> {
        let mut cart = self
            .cart_repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| Cart::new(user_id.clone()));

        cart.remove_item(product_id)?;
        self.cart_repo.save(&cart).await?;

        Ok(())
    }

    /// Replace the quantity of an existing cart line.
    ///
    /// # Errors
    ///
    /// Returns error if the cart has no line for the product, the new
    /// quantity exceeds current stock, or persistence fails.
    pub async fn update_quantity(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<(), ProcessingError> {
        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound {
                product_id: product_id.to_string(),
            })?;

        if !product.is_available(quantity) {
            return Err(CatalogError::InsufficientStock {
                product_id: product_id.to_string(),
                requested: quantity,
                available: product.stock(),
            }
            .into());
        }

        let mut cart = self
            .cart_repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| Cart::new(user_id.clone()));

        cart.update_quantity(product_id, quantity)?;
        self.cart_repo.save(&cart).await?;

        Ok(())
    }

    /// View the user's cart, priced against the current catalog.
    ///
    /// A user who never touched their cart sees an empty one.
    ///
    /// # Errors
    ///
    /// Returns error if the load fails.
    pub async fn view_cart(&self, user_id: &UserId) -> Result<CartDto, ProcessingError> {
        let cart = self
            .cart_repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| Cart::new(user_id.clone()));

        let products = self.product_repo.find_all().await?;

        Ok(CartDto::from_cart(&cart, &products))
    }
}
