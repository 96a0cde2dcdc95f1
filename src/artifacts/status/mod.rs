//! Working tree cleanliness
//!
//! ## Components
//!
//! - `working_tree`: changed and untracked path counts a situation reports as clean or dirty

pub mod working_tree;
