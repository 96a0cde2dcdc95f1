//! Error taxonomy of the library
//!
//! Repository accessors report failures as `anyhow::Error`. The tag index, describe
//! engine and situation resolver translate them into [`StampError`] so callers can
//! tell a broken repository read apart from a revision that does not exist.
//!
//! An empty repository (no commits yet) is never an error.

use std::fmt::Display;

pub type StampResult<T> = Result<T, StampError>;

#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error("failed to {operation} {subject}")]
    RepositoryRead {
        operation: &'static str,
        subject: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("revision '{revision}' not found")]
    RevisionNotFound { revision: String },

    #[error("invalid tag pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl StampError {
    pub fn repository_read(
        operation: &'static str,
        subject: impl Display,
        source: anyhow::Error,
    ) -> Self {
        StampError::RepositoryRead {
            operation,
            subject: subject.to_string(),
            source: source.into(),
        }
    }
}

/// Attach the failed operation and its subject to an accessor result
pub(crate) trait ReadContext<T> {
    fn read_context(self, operation: &'static str, subject: impl Display) -> StampResult<T>;
}

impl<T> ReadContext<T> for anyhow::Result<T> {
    fn read_context(self, operation: &'static str, subject: impl Display) -> StampResult<T> {
        self.map_err(|source| StampError::repository_read(operation, subject, source))
    }
}
