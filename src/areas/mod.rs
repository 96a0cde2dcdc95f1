//! Repository access backed by libgit2
//!
//! - `database`: commit and tag object reads
//! - `refs`: HEAD, branches and the tag namespace
//! - `repository`: discovery, output writer, and the [`crate::artifacts::core::accessor::RepositoryAccessor`] implementation
//! - `workspace`: working tree status

pub(crate) mod database;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod workspace;
