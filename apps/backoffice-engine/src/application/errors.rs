//! Application-level errors.
//!
//! Use cases surface one error type that wraps the bounded-context
//! errors, so callers handle a single enum at the orchestration
//! boundary.

use thiserror::Error;

use crate::domain::cart::CartError;
use crate::domain::catalog::CatalogError;
use crate::domain::ordering::OrderError;

/// Errors returned by the application use cases.
#[derive(Debug, Clone, Error)]
pub enum ProcessingError {
    /// Catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart operation failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Order operation failed.
    #[error(transparent)]
    Order(#[from] OrderError),
}
