//! Tags and the commits they describe
//!
//! - `tag_ref`: tag references and their peeled form
//! - `ordering`: the tie-break rule between tags on the same commit
//! - `pattern`: full-name matching of tag names
//! - `tag_index`: commit → tags reverse mapping

pub mod ordering;
pub mod pattern;
pub mod tag_index;
pub mod tag_ref;
