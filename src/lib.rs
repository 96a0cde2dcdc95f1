//! Repository provenance for build artifacts
//!
//! `gitstamp` derives a snapshot of where a repository currently stands: the commit,
//! its timestamp, the branch, the tags pointing at it, whether the working tree is
//! clean, and a `git describe`-style description (nearest matching first-parent
//! ancestor tag plus the distance to it).
//!
//! - `areas`: the git2-backed repository accessor
//! - `artifacts`: tag index, describe engine, situation resolver and their value types
//! - `commands`: CLI command implementations
//! - `errors`: the error taxonomy surfaced by the library

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// How command results are written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable, aligned key/value lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}
