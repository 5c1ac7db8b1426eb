//! # playgen
//!
//! Generate playlists from a numbered URL template.
//!
//! A template such as `http://example.com/episode_*.mp3` is expanded over an
//! inclusive number range, optionally checked with concurrent HTTP HEAD
//! requests, and written as a Plain, M3U, M3U8, PLS or XSPF playlist.
//!
//! ## Module Organization
//!
//! - [`core`] - Constants and the error type
//! - [`config`] - TOML defaults, CLI merging and the resolved run configuration
//! - [`playlist`] - Templates, document model, serializers and the builder
//! - [`validation`] - URL verification and the bounded-concurrency scheduler
//! - [`ui`] - CLI definition, console output, logging and progress bars

pub mod config;
pub mod core;
pub mod playlist;
pub mod ui;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{CliConfig, Config, PlaylistConfig};
pub use core::{PlaygenError, Result};
pub use playlist::{
    BuildState, BuildSummary, PlaylistBuilder, PlaylistDocument, PlaylistEntry, PlaylistFormat,
    Template,
};
pub use validation::{
    HttpVerifier, VerificationResult, VerificationScheduler, VerifierOptions, VerifyUrl,
};
