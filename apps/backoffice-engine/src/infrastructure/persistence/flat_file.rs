//! Flat-file repository adapters.
//!
//! Each collection lives in one pipe-delimited text file and every
//! mutation is a full read-modify-rewrite of that file. Writes go to a
//! temp file in the same directory and land with a rename, so a
//! half-written collection can never be observed. A per-repository
//! async mutex serializes the read-modify-write cycles.
//!
//! Orders span two files (headers and items). Items are written first
//! and the header rename happens last, making the header file the
//! commit point: an order header can never exist without its items,
//! and item lines whose header never landed are dropped with a warning
//! at load time.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::records;
use crate::domain::catalog::aggregate::Product;
use crate::domain::catalog::{CatalogError, ProductRepository};
use crate::domain::ordering::aggregate::{Order, OrderLine, ReconstitutedOrderParams};
use crate::domain::ordering::value_objects::{OrderStatus, ShippingAddress};
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{OrderId, ProductId, UserId};

/// Read a collection file, treating a missing file as empty.
async fn read_collection(path: &Path) -> Result<Vec<String>, std::io::Error> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(contents
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(ToString::to_string)
            .collect()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Write a collection file atomically: temp file in the same
/// directory, then rename over the target.
async fn write_collection(path: &Path, lines: &[String]) -> Result<(), std::io::Error> {
    let mut contents = lines.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }

    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    tokio::fs::write(&tmp, contents).await?;
    tokio::fs::rename(&tmp, path).await
}

// ============================================================================
// Products
// ============================================================================

/// Flat-file implementation of `ProductRepository`.
///
/// One product per line in `id|name|price|category|stock|description|createdAt`
/// order.
#[derive(Debug)]
pub struct FlatFileProductRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FlatFileProductRepository {
    /// Create a repository backed by the given file.
    ///
    /// The file is created on first save; a missing file reads as an
    /// empty catalog.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Product>, CatalogError> {
        let lines = read_collection(&self.path)
            .await
            .map_err(|e| CatalogError::Storage {
                message: format!("Failed to read {}: {e}", self.path.display()),
            })?;

        lines
            .iter()
            .map(|line| {
                records::decode_product(line).map_err(|e| CatalogError::Storage {
                    message: e.to_string(),
                })
            })
            .collect()
    }

    async fn write_all(&self, products: &[Product]) -> Result<(), CatalogError> {
        let lines = products
            .iter()
            .map(records::encode_product)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CatalogError::Storage {
                message: e.to_string(),
            })?;

        write_collection(&self.path, &lines)
            .await
            .map_err(|e| CatalogError::Storage {
                message: format!("Failed to write {}: {e}", self.path.display()),
            })
    }
}

#[async_trait]
impl ProductRepository for FlatFileProductRepository {
    async fn save(&self, product: &Product) -> Result<(), CatalogError> {
        let _guard = self.lock.lock().await;

        let mut products = self.load_all().await?;
        match products.iter_mut().find(|p| p.id() == product.id()) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }

        self.write_all(&products).await
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let _guard = self.lock.lock().await;
        let products = self.load_all().await?;
        Ok(products.into_iter().find(|p| p.id() == id))
    }

    async fn find_all(&self) -> Result<Vec<Product>, CatalogError> {
        let _guard = self.lock.lock().await;
        self.load_all().await
    }

    async fn exists(&self, id: &ProductId) -> Result<bool, CatalogError> {
        let _guard = self.lock.lock().await;
        let products = self.load_all().await?;
        Ok(products.iter().any(|p| p.id() == id))
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Flat-file implementation of `OrderRepository` over a header file
/// and an items file.
#[derive(Debug)]
pub struct FlatFileOrderRepository {
    orders_path: PathBuf,
    items_path: PathBuf,
    lock: Mutex<()>,
}

impl FlatFileOrderRepository {
    /// Create a repository backed by the given header and items files.
    #[must_use]
    pub fn new(orders_path: impl Into<PathBuf>, items_path: impl Into<PathBuf>) -> Self {
        Self {
            orders_path: orders_path.into(),
            items_path: items_path.into(),
            lock: Mutex::new(()),
        }
    }

    fn storage_error(&self, message: impl std::fmt::Display) -> OrderError {
        OrderError::Storage {
            message: message.to_string(),
        }
    }

    async fn load_all(&self) -> Result<Vec<Order>, OrderError> {
        let header_lines = read_collection(&self.orders_path)
            .await
            .map_err(|e| self.storage_error(format!("Failed to read {}: {e}", self.orders_path.display())))?;
        let item_lines = read_collection(&self.items_path)
            .await
            .map_err(|e| self.storage_error(format!("Failed to read {}: {e}", self.items_path.display())))?;

        let headers = header_lines
            .iter()
            .map(|line| records::decode_order_header(line).map_err(|e| self.storage_error(e)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut items: Vec<(OrderId, OrderLine)> = item_lines
            .iter()
            .map(|line| records::decode_order_item(line).map_err(|e| self.storage_error(e)))
            .collect::<Result<Vec<_>, _>>()?;

        // Item lines whose header never committed are leftovers from an
        // interrupted write; drop them.
        items.retain(|(order_id, _)| {
            let has_header = headers.iter().any(|h| &h.id == order_id);
            if !has_header {
                tracing::warn!(order_id = %order_id, "Dropping order item without a header");
            }
            has_header
        });

        let orders = headers
            .into_iter()
            .map(|header| {
                let shipping_address = ShippingAddress::new(header.shipping_address)
                    .map_err(|e| self.storage_error(e))?;
                let lines: Vec<OrderLine> = items
                    .iter()
                    .filter(|(order_id, _)| order_id == &header.id)
                    .map(|(_, line)| line.clone())
                    .collect();

                Ok(Order::reconstitute(ReconstitutedOrderParams {
                    id: header.id,
                    user_id: header.user_id,
                    status: header.status,
                    lines,
                    total_amount: header.total_amount,
                    shipping_address,
                    phone_number: header.phone_number,
                    order_date: header.order_date,
                    payment_date: None,
                    shipping_date: None,
                    delivery_date: None,
                }))
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        Ok(orders)
    }

    /// Rewrite both collections. Items land first; the header rename is
    /// the commit point.
    async fn write_all(&self, orders: &[Order]) -> Result<(), OrderError> {
        let mut item_lines = Vec::new();
        let mut header_lines = Vec::with_capacity(orders.len());

        for order in orders {
            for line in order.lines() {
                item_lines.push(
                    records::encode_order_item(order.id(), line)
                        .map_err(|e| self.storage_error(e))?,
                );
            }
            header_lines.push(
                records::encode_order_header(
                    order.id(),
                    order.user_id(),
                    order.total_amount(),
                    order.shipping_address().as_str(),
                    order.phone_number(),
                    order.status(),
                    order.order_date(),
                )
                .map_err(|e| self.storage_error(e))?,
            );
        }

        write_collection(&self.items_path, &item_lines)
            .await
            .map_err(|e| {
                self.storage_error(format!("Failed to write {}: {e}", self.items_path.display()))
            })?;
        write_collection(&self.orders_path, &header_lines)
            .await
            .map_err(|e| {
                self.storage_error(format!("Failed to write {}: {e}", self.orders_path.display()))
            })
    }
}

#[async_trait]
impl OrderRepository for FlatFileOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), OrderError> {
        let _guard = self.lock.lock().await;

        let mut orders = self.load_all().await?;
        match orders.iter_mut().find(|o| o.id() == order.id()) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }

        self.write_all(&orders).await
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let _guard = self.lock.lock().await;
        let orders = self.load_all().await?;
        Ok(orders.into_iter().find(|o| o.id() == id))
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let _guard = self.lock.lock().await;
        let mut mine: Vec<Order> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|o| o.user_id() == user_id)
            .collect();
        mine.sort_by(|a, b| b.order_date().cmp(&a.order_date()));
        Ok(mine)
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let _guard = self.lock.lock().await;
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|o| o.status() == status)
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        let _guard = self.lock.lock().await;
        self.load_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::aggregate::RegisterProductCommand;
    use crate::domain::ordering::aggregate::PlaceOrderCommand;
    use crate::domain::shared::{Money, Quantity};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn widget(name: &str) -> Product {
        Product::register(RegisterProductCommand {
            name: name.to_string(),
            unit_price: Money::new(dec!(19.99)),
            category: "tools".to_string(),
            stock: Quantity::new(7),
            description: "A fine widget".to_string(),
        })
        .unwrap()
    }

    fn order_for(user: &str) -> Order {
        Order::place(PlaceOrderCommand {
            user_id: UserId::new(user),
            lines: vec![
                OrderLine::new(ProductId::new("p-1"), Quantity::new(2), Money::new(dec!(4.50))),
                OrderLine::new(ProductId::new("p-2"), Quantity::new(1), Money::new(dec!(10.00))),
            ],
            shipping_address: ShippingAddress::new("1 Main St").unwrap(),
            phone_number: "555-0100".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileProductRepository::new(dir.path().join("products.txt"));

        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(!repo.exists(&ProductId::new("p-1")).await.unwrap());
    }

    #[tokio::test]
    async fn product_survives_rewrite_cycle() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileProductRepository::new(dir.path().join("products.txt"));

        let product = widget("Widget");
        repo.save(&product).await.unwrap();

        let found = repo.find_by_id(product.id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "Widget");
        assert_eq!(found.unit_price().amount(), dec!(19.99));
        assert_eq!(found.stock(), Quantity::new(7));
        assert_eq!(found.description(), "A fine widget");
        assert_eq!(found.created_at(), product.created_at());
    }

    #[tokio::test]
    async fn save_replaces_one_record_keeps_the_rest() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileProductRepository::new(dir.path().join("products.txt"));

        let mut first = widget("First");
        let second = widget("Second");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        first.deduct(Quantity::new(3)).unwrap();
        repo.save(&first).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        let stored = repo.find_by_id(first.id()).await.unwrap().unwrap();
        assert_eq!(stored.stock(), Quantity::new(4));
        let untouched = repo.find_by_id(second.id()).await.unwrap().unwrap();
        assert_eq!(untouched.stock(), Quantity::new(7));
    }

    #[tokio::test]
    async fn no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        let repo = FlatFileProductRepository::new(&path);

        repo.save(&widget("Widget")).await.unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("products.txt.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_line_surfaces_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        tokio::fs::write(&path, "only|three|fields\n").await.unwrap();
        let repo = FlatFileProductRepository::new(&path);

        let result = repo.find_all().await;
        assert!(matches!(result, Err(CatalogError::Storage { .. })));
    }

    #[tokio::test]
    async fn order_roundtrips_across_both_files() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileOrderRepository::new(
            dir.path().join("orders.txt"),
            dir.path().join("order_items.txt"),
        );

        let mut order = order_for("user-1");
        order.mark_paid().unwrap();
        repo.save(&order).await.unwrap();

        let found = repo.find_by_id(order.id()).await.unwrap().unwrap();
        assert_eq!(found.user_id().as_str(), "user-1");
        assert_eq!(found.status(), OrderStatus::Paid);
        assert_eq!(found.lines(), order.lines());
        assert_eq!(found.total_amount(), order.total_amount());
        assert_eq!(found.order_date(), order.order_date());
        assert!(found.total_matches_lines());
    }

    #[tokio::test]
    async fn orphan_item_lines_are_dropped_on_load() {
        let dir = TempDir::new().unwrap();
        let orders_path = dir.path().join("orders.txt");
        let items_path = dir.path().join("order_items.txt");

        let repo = FlatFileOrderRepository::new(&orders_path, &items_path);
        let order = order_for("user-1");
        repo.save(&order).await.unwrap();

        // Simulate an interrupted write: item lines for an order whose
        // header never landed.
        let mut items = tokio::fs::read_to_string(&items_path).await.unwrap();
        items.push_str("ghost-order|p-9|5|1.00\n");
        tokio::fs::write(&items_path, items).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id(), order.id());
        assert_eq!(all[0].lines().len(), 2);
    }

    #[tokio::test]
    async fn queries_filter_by_user_and_status() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileOrderRepository::new(
            dir.path().join("orders.txt"),
            dir.path().join("order_items.txt"),
        );

        let order1 = order_for("user-1");
        let mut order2 = order_for("user-1");
        order2.mark_paid().unwrap();
        let order3 = order_for("user-2");
        repo.save(&order1).await.unwrap();
        repo.save(&order2).await.unwrap();
        repo.save(&order3).await.unwrap();

        assert_eq!(repo.find_by_user(&UserId::new("user-1")).await.unwrap().len(), 2);
        let paid = repo.find_by_status(OrderStatus::Paid).await.unwrap();
        assert_eq!(paid.len(), 1);
        assert_eq!(paid[0].id(), order2.id());
    }

    #[tokio::test]
    async fn status_update_persists() {
        let dir = TempDir::new().unwrap();
        let repo = FlatFileOrderRepository::new(
            dir.path().join("orders.txt"),
            dir.path().join("order_items.txt"),
        );

        let order = order_for("user-1");
        repo.save(&order).await.unwrap();

        let mut loaded = repo.find_by_id(order.id()).await.unwrap().unwrap();
        loaded.mark_paid().unwrap();
        repo.save(&loaded).await.unwrap();

        let reloaded = repo.find_by_id(order.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.status(), OrderStatus::Paid);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
