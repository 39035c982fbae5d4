//! Application layer: Use cases and services.
//!
//! This module orchestrates domain types with the store port to implement
//! the registry use cases.

mod registry;

pub use registry::{RegistryError, RegistryService};
