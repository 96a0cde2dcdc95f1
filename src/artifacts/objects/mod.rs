//! Git object identity
//!
//! The repository accessor hands out commits and tags by their SHA-1 identifier.
//! Object content itself is never parsed here: it is read through the git library.

pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated hash used in descriptions
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
