//! Utility modules for common functionality

pub mod validators;

// Re-export commonly used functions
pub use validators::{ValidationError, validate_api_path};
