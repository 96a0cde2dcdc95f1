//! Value types and algorithms
//!
//! - `branch`: reference names and revision parsing
//! - `core`: the repository accessor seam
//! - `describe`: first-parent walk to the nearest matching tag
//! - `objects`: object identifiers
//! - `situation`: snapshot of a revision (hash, time, branch, tags, cleanliness)
//! - `status`: working tree change counts
//! - `tags`: tag references, tie-break ordering, patterns and the tag index

pub mod branch;
pub mod core;
pub mod describe;
pub mod objects;
pub mod situation;
pub mod status;
pub mod tags;
