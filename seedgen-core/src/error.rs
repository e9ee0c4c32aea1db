//! Error types for seedgen.
//!
//! Generation itself never fails. Errors only come from validating
//! constructors and configuration.

use thiserror::Error;

/// Main error type for seedgen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedgenError {
    /// A frequency weight was NaN or infinite.
    #[error("Invalid weight {weight} at alternative {index}: weights must be finite")]
    InvalidWeight { index: usize, weight: f64 },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type for seedgen operations.
pub type Result<T> = std::result::Result<T, SeedgenError>;
