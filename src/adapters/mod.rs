//! Adapters layer: Concrete implementations of ports.
//!
//! - `memory`: `Vec`-backed patient store
//! - `sanitize`: credential filtering for logs

pub mod memory;
pub mod sanitize;

pub use memory::InMemoryStore;
