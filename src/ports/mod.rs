//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the registry use cases and the collection holding the records.

mod store;

pub use store::PatientStore;
