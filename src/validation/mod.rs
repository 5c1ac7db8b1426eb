//! URL verification
//!
//! This module probes generated URLs over HTTP and schedules those probes
//! across a bounded number of concurrent requests.

pub mod scheduler;
pub mod verifier;

// Re-export commonly used items
pub use scheduler::{VerificationResult, VerificationScheduler};
pub use verifier::{HttpVerifier, VerifierOptions, VerifyUrl};
