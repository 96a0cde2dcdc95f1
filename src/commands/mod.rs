//! Command implementations
//!
//! - `plumbing`: single-purpose queries meant for scripts (tags at a revision)
//! - `porcelain`: the situation, describe and stamp reports
//!
//! Every command writes to the repository writer, either as aligned text or as one
//! JSON document.

pub mod plumbing;
pub mod porcelain;

use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use serde::Serialize;
use std::io::Write;

impl Repository {
    pub(crate) fn write_json(&self, value: &impl Serialize) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer(), "{}", json)?;

        Ok(())
    }
}

/// Parse an optional revision argument, defaulting to HEAD
pub(crate) fn parse_revision(revision: Option<&str>) -> anyhow::Result<Revision> {
    Ok(revision.map(Revision::try_parse).transpose()?.unwrap_or_default())
}
