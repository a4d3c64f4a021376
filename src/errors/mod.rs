//! Centralized error handling for the subscriber catalog.
//!
//! # Error Categories
//!
//! - **Catalog Errors**: server-side stream lookup failures (non-fatal,
//!   resolved as "absent" entries)
//! - **Validation Errors**: field-bag bound/required/enum violations at the
//!   transport boundary
//! - **Registry Errors**: device lifecycle misuse and write conflicts
//! - **Integrity Errors**: dangling-reference prevention contract

pub mod types;

pub use types::*;

/// Convenience type alias for Results using CatalogAppError
pub type AppResult<T> = Result<T, CatalogAppError>;

/// Convenience type alias for field-bag validation Results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for device registry Results
pub type RegistryResult<T> = Result<T, RegistryError>;
