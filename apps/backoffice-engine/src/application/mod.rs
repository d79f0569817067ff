//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Use Cases**: Application-specific business rules
//! - **DTOs**: Data transfer objects for API boundaries
//! - **Errors**: The single error surface callers handle

pub mod dto;
pub mod errors;
pub mod use_cases;

pub use dto::*;
pub use errors::ProcessingError;
pub use use_cases::*;
