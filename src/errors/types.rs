//! Error type definitions for the subscriber catalog.
//!
//! The taxonomy separates the four failure classes the core distinguishes:
//! catalog lookups that miss or fail (non-fatal, softened to "absent" by the
//! resolver), validation failures at the transport boundary, referential
//! integrity violations, and device-list write conflicts.

use thiserror::Error;
use uuid::Uuid;

use crate::models::stream::StreamType;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum CatalogAppError {
    /// Server catalog lookup errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Field-bag validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Device registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Referential integrity errors
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Failures while querying a server-side stream catalog.
///
/// The resolver treats every variant here as "stream absent on this server"
/// and skips the entry; these never abort a resolution.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog backend could not be reached
    #[error("Server {server} unavailable: {reason}")]
    Unavailable { server: Uuid, reason: String },

    /// The lookup exceeded its deadline
    #[error("Lookup on server {server} timed out")]
    Timeout { server: Uuid },
}

/// A field bag failed its bound/required/enum constraint.
///
/// Surfaced before an entity is constructed or updated; values are never
/// silently coerced into range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    Required { field: &'static str },

    #[error("Field '{field}' length must be {min}..={max}")]
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Field '{field}' must be within {min}..={max}")]
    ValueOutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Field '{field}' is not a valid URL")]
    InvalidUrl { field: &'static str },

    #[error("Field '{field}' must hold {min}..={max} entries")]
    ListSizeOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    /// A form was applied to a stream entity of a different variant
    #[error("Expected a {expected} stream, got {actual}")]
    VariantMismatch {
        expected: StreamType,
        actual: StreamType,
    },
}

/// Device registry failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Disallowed device status transition (banned devices are terminal)
    #[error("Device {device} cannot move from {from} to {to}")]
    InvalidTransition {
        device: Uuid,
        from: crate::models::DeviceStatus,
        to: crate::models::DeviceStatus,
    },

    /// The device id is not registered for this subscriber
    #[error("Device {device} not found")]
    DeviceNotFound { device: Uuid },

    /// A concurrent writer won the race for this subscriber's device list;
    /// the caller should re-read and retry
    #[error("Device list for subscriber {subscriber} was modified concurrently")]
    Conflict { subscriber: Uuid },
}

/// An operation would leave a dangling reference behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrityError {
    #[error("Dangling reference: {resource} {id} is still referenced")]
    DanglingReference { resource: &'static str, id: Uuid },
}
