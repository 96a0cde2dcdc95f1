//! Porcelain commands
//!
//! - `situation`: where the repository stands at a revision
//! - `describe`: nearest matching first-parent tag
//! - `stamp`: both of the above against a single tag index

pub mod describe;
pub mod situation;
pub mod stamp;
