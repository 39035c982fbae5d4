//! # Wardbook
//!
//! In-memory hospital patient registry behind a gated console menu.
//!
//! This crate provides:
//! - A session gate enforcing a user id / password format policy
//! - A registry of patient records with soft delete and billing
//! - A line-oriented console shell driving both
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (PatientRecord, SessionGate, credential policy)
//! - `ports`: Trait definitions for the record store
//! - `adapters`: Concrete implementations (in-memory store, log sanitization)
//! - `application`: Use cases orchestrating domain and ports
//! - `shell`: Console user interface
//! - `config`: Environment-driven logging configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod shell;

pub use application::{RegistryError, RegistryService};
pub use domain::{PatientRecord, SessionGate};

/// Result type for Wardbook operations
pub type Result<T> = std::result::Result<T, WardbookError>;

/// Main error type for Wardbook.
///
/// Every variant is fatal to the console session. Recoverable outcomes
/// (bad credentials, unknown patient id) never surface as this type.
#[derive(Debug, thiserror::Error)]
pub enum WardbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field}: {value:?} is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Input stream closed while waiting for {0}")]
    EndOfInput(&'static str),
}
