// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Backoffice Engine - Rust Core Library
//!
//! Order lifecycle and inventory consistency core for a retail
//! back-office: product catalog with its stock ledger, per-user carts,
//! and orders driven through a fixed status state machine, persisted
//! to flat files.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects)
//!   - `catalog`: Product aggregate and the stock ledger
//!   - `cart`: Per-user cart aggregate
//!   - `ordering`: Order aggregate, status state machine, price snapshots
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `PlaceOrder`, `ManageCart`, `UpdateOrderStatus`,
//!     `CancelOrder`, `OrderQueries`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: flat-file and in-memory repository adapters
//!   - `container`: dependency injection wiring

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::cart::aggregate::Cart;
pub use domain::catalog::aggregate::Product;
pub use domain::ordering::{
    aggregate::{Order, OrderLine},
    value_objects::OrderStatus,
};
pub use domain::shared::{Money, OrderId, ProductId, Quantity, Timestamp, UserId};

// Application re-exports
pub use application::errors::ProcessingError;
pub use application::use_cases::{
    CancelOrderUseCase, ManageCartUseCase, OrderQueriesUseCase, PlaceOrderUseCase,
    UpdateOrderStatusUseCase,
};

// Infrastructure re-exports
pub use infrastructure::{Container, FileBackedContainer, InMemoryContainer};
