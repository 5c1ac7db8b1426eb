//! Playlist generation
//!
//! URL templates, the playlist document model, per-format serializers and
//! the builder that drives a complete run.

pub mod builder;
pub mod entry;
pub mod format;
pub mod template;

// Re-export commonly used items
pub use builder::{BuildState, BuildSummary, PlaylistBuilder};
pub use entry::{Decoration, PlaylistDocument, PlaylistEntry, default_title, write_playlist};
pub use format::{PlaylistFormat, PlaylistSerializer};
pub use template::{Template, generate};
