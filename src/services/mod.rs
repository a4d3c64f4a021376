//! Service layer: catalog access, projection, resolution, device lifecycle.

pub mod catalog;
pub mod device_registry;
pub mod projector;
pub mod resolver;

pub use catalog::{InMemoryServerCatalog, ServerCatalog};
pub use device_registry::DeviceRegistry;
pub use projector::{FieldSelection, ProjectionPolicy, ViewProjector};
pub use resolver::{ResolvedStreams, StreamResolver};
