//! Core domain types shared across the crate

pub mod errors;

pub use errors::VeilError;

/// Crate-wide result type for construction and configuration paths
pub type Result<T> = std::result::Result<T, VeilError>;
