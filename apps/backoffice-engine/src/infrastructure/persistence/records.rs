//! Flat-file record codecs.
//!
//! One record per line, pipe-delimited, fixed field order:
//!
//! - Product: `id|name|price|category|stock|description|createdAt`
//! - Order header: `id|userId|totalAmount|shippingAddress|phoneNumber|status|orderDate`
//! - Order item: `orderId|productId|quantity|unitPrice`
//!
//! Timestamps use `%Y-%m-%d %H:%M:%S`. Free-text fields containing the
//! delimiter or a newline are rejected at encode time so a record can
//! never corrupt the line it lives on.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::catalog::aggregate::{Product, ReconstitutedProductParams};
use crate::domain::ordering::aggregate::OrderLine;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::shared::{Money, OrderId, ProductId, Quantity, Timestamp, UserId};

const DELIMITER: char = '|';

/// Errors raised by the record codecs.
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    /// A free-text field contains a character the format cannot carry.
    #[error("Field '{field}' contains a character not representable in the record format")]
    UnencodableField {
        /// Offending field name.
        field: String,
    },

    /// A line has the wrong number of fields.
    #[error("Malformed {record_type} record: expected {expected} fields, found {found}")]
    FieldCount {
        /// Record type name.
        record_type: &'static str,
        /// Expected field count.
        expected: usize,
        /// Actual field count.
        found: usize,
    },

    /// A field failed to parse.
    #[error("Malformed {record_type} record: field '{field}': {message}")]
    FieldParse {
        /// Record type name.
        record_type: &'static str,
        /// Offending field name.
        field: &'static str,
        /// Parser message.
        message: String,
    },
}

fn check_text(field: &str, value: &str) -> Result<(), RecordError> {
    if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(RecordError::UnencodableField {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn split_fields<'a>(
    line: &'a str,
    record_type: &'static str,
    expected: usize,
) -> Result<Vec<&'a str>, RecordError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            record_type,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_field<T, E>(
    value: Result<T, E>,
    record_type: &'static str,
    field: &'static str,
) -> Result<T, RecordError>
where
    E: std::fmt::Display,
{
    value.map_err(|e| RecordError::FieldParse {
        record_type,
        field,
        message: e.to_string(),
    })
}

// ============================================================================
// Product records
// ============================================================================

/// Encode a product as one record line (without trailing newline).
///
/// # Errors
///
/// Returns error if a free-text field contains the delimiter or a
/// newline.
pub fn encode_product(product: &Product) -> Result<String, RecordError> {
    check_text("id", product.id().as_str())?;
    check_text("name", product.name())?;
    check_text("category", product.category())?;
    check_text("description", product.description())?;

    Ok(format!(
        "{}|{}|{}|{}|{}|{}|{}",
        product.id(),
        product.name(),
        product.unit_price().amount(),
        product.category(),
        product.stock(),
        product.description(),
        product.created_at().to_ledger(),
    ))
}

/// Decode one product record line.
///
/// # Errors
///
/// Returns error on a wrong field count or an unparseable field.
pub fn decode_product(line: &str) -> Result<Product, RecordError> {
    let fields = split_fields(line, "product", 7)?;

    let unit_price = parse_field(Money::from_str(fields[2]), "product", "price")?;
    let stock = parse_field(Quantity::from_str(fields[4]), "product", "stock")?;
    let created_at = parse_field(Timestamp::parse_ledger(fields[6]), "product", "createdAt")?;

    Ok(Product::reconstitute(ReconstitutedProductParams {
        id: ProductId::new(fields[0]),
        name: fields[1].to_string(),
        unit_price,
        category: fields[3].to_string(),
        stock,
        description: fields[5].to_string(),
        created_at,
    }))
}

// ============================================================================
// Order records
// ============================================================================

/// The header fields of a persisted order, before its items are joined
/// back in.
#[derive(Debug, Clone)]
pub struct OrderHeaderRecord {
    /// Order identifier.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Persisted total amount.
    pub total_amount: Money,
    /// Shipping address text.
    pub shipping_address: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Order status.
    pub status: OrderStatus,
    /// Placement timestamp.
    pub order_date: Timestamp,
}

/// Encode an order header as one record line.
///
/// # Errors
///
/// Returns error if a free-text field contains the delimiter or a
/// newline.
pub fn encode_order_header(
    id: &OrderId,
    user_id: &UserId,
    total_amount: Money,
    shipping_address: &str,
    phone_number: &str,
    status: OrderStatus,
    order_date: Timestamp,
) -> Result<String, RecordError> {
    check_text("id", id.as_str())?;
    check_text("userId", user_id.as_str())?;
    check_text("shippingAddress", shipping_address)?;
    check_text("phoneNumber", phone_number)?;

    Ok(format!(
        "{}|{}|{}|{}|{}|{}|{}",
        id,
        user_id,
        total_amount.amount(),
        shipping_address,
        phone_number,
        status,
        order_date.to_ledger(),
    ))
}

/// Decode one order header line.
///
/// # Errors
///
/// Returns error on a wrong field count or an unparseable field.
pub fn decode_order_header(line: &str) -> Result<OrderHeaderRecord, RecordError> {
    let fields = split_fields(line, "order", 7)?;

    let total_amount = parse_field(Money::from_str(fields[2]), "order", "totalAmount")?;
    let status = parse_field(OrderStatus::from_str(fields[5]), "order", "status")?;
    let order_date = parse_field(Timestamp::parse_ledger(fields[6]), "order", "orderDate")?;

    Ok(OrderHeaderRecord {
        id: OrderId::new(fields[0]),
        user_id: UserId::new(fields[1]),
        total_amount,
        shipping_address: fields[3].to_string(),
        phone_number: fields[4].to_string(),
        status,
        order_date,
    })
}

/// Encode one order line as an item record.
///
/// # Errors
///
/// Returns error if an id field contains the delimiter or a newline.
pub fn encode_order_item(order_id: &OrderId, line: &OrderLine) -> Result<String, RecordError> {
    check_text("orderId", order_id.as_str())?;
    check_text("productId", line.product_id().as_str())?;

    Ok(format!(
        "{}|{}|{}|{}",
        order_id,
        line.product_id(),
        line.quantity(),
        line.unit_price().amount(),
    ))
}

/// Decode one order item line into its owning order id and the line.
///
/// # Errors
///
/// Returns error on a wrong field count or an unparseable field.
pub fn decode_order_item(line: &str) -> Result<(OrderId, OrderLine), RecordError> {
    let fields = split_fields(line, "order item", 4)?;

    let quantity = parse_field(Quantity::from_str(fields[2]), "order item", "quantity")?;
    let unit_price = parse_field(Money::from_str(fields[3]), "order item", "unitPrice")?;

    Ok((
        OrderId::new(fields[0]),
        OrderLine::new(ProductId::new(fields[1]), quantity, unit_price),
    ))
}
