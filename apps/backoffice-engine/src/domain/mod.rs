//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Products and the stock ledger
//! - [`cart`]: Per-user shopping cart aggregate
//! - [`ordering`]: Order lifecycle with its status state machine

pub mod cart;
pub mod catalog;
pub mod ordering;
pub mod shared;
