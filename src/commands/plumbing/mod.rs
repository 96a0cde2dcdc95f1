//! Plumbing commands
//!
//! - `tags`: tags pointing at a revision, in tie-break order

pub mod tags;
