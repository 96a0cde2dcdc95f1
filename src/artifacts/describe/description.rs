use crate::artifacts::branch::TAG_REF_PREFIX;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::Serialize;

/// Nearest matching tag of a commit and how far back it is
///
/// Displays the way `git describe --tags --always` does: `v1.0` when the tag is on
/// the commit itself, `v1.0-3-gabc1234` when it is three first-parent steps back,
/// and the abbreviated hash alone when no tag matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Description {
    /// The commit the walk started from
    hash: ObjectId,
    /// Full name of the matched tag, e.g. `refs/tags/v1.0`
    tag: Option<String>,
    /// First-parent steps from `hash` to the tagged commit (or to where the walk stopped)
    depth: usize,
}

impl Description {
    /// The description of a repository without commits
    pub fn empty() -> Self {
        Description::new(ObjectId::no_commit(), None, 0)
    }

    pub fn hash(&self) -> &ObjectId {
        &self.hash
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn tag_short_name(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .map(|tag| tag.strip_prefix(TAG_REF_PREFIX).unwrap_or(tag))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tag_short_name() {
            Some(tag) if self.depth == 0 => write!(f, "{}", tag),
            Some(tag) => write!(f, "{}-{}-g{}", tag, self.depth, self.hash.to_short_oid()),
            None => write!(f, "{}", self.hash.to_short_oid()),
        }
    }
}
