//! Core types and foundational components
//!
//! This module contains error handling and constants used throughout
//! the application.

pub mod constants;
pub mod error;

// Re-export commonly used items for convenience
pub use error::{PlaygenError, Result};
