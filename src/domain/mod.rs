//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O.

pub mod credentials;
mod patient;
mod session;

pub use credentials::CredentialError;
pub use patient::PatientRecord;
pub use session::SessionGate;
