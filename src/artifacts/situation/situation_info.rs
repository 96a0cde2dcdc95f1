use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::Serialize;

/// Where a repository stands at one revision
///
/// Built fresh on every resolution; nothing is computed lazily or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Situation {
    /// The resolved commit, or [`crate::artifacts::objects::object_id::NO_COMMIT`]
    hash: ObjectId,
    /// Committer time in seconds since the Unix epoch (0 without a commit)
    timestamp: i64,
    /// Short branch name; `None` when detached or when the revision is not a branch
    branch: Option<String>,
    /// Short names of the tags pointing at `hash`, in tie-break order
    tags: Vec<String>,
    /// No staged, unstaged or untracked changes
    clean: bool,
}

impl Situation {
    pub fn hash(&self) -> &ObjectId {
        &self.hash
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(self.timestamp, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_clean(&self) -> bool {
        self.clean
    }
}
