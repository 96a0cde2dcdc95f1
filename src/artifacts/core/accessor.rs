use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::working_tree::WorkingTreeStatus;
use crate::artifacts::tags::tag_ref::{PeeledTag, TagRef};

/// Read access to a repository
///
/// The tag index, describe engine and situation resolver only ever see a repository
/// through this trait. [`crate::areas::repository::Repository`] implements it on top
/// of libgit2; tests use an in-memory implementation.
///
/// Implementations report failures as `anyhow::Error`; callers translate them into
/// [`crate::errors::StampError::RepositoryRead`].
pub trait RepositoryAccessor {
    /// Resolve a revision string to the commit it designates
    ///
    /// Returns `None` when the revision does not name anything, including an unborn
    /// HEAD in a repository without commits.
    fn resolve(&self, revision: &str) -> anyhow::Result<Option<ObjectId>>;

    /// Parent commits in recorded order; the first element is the first parent
    fn parentage_of(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>>;

    /// Committer time of a commit in seconds since the Unix epoch
    fn commit_timestamp(&self, commit: &ObjectId) -> anyhow::Result<i64>;

    /// Short name of the checked-out branch, or the raw commit id when HEAD is detached
    fn current_branch_name_or_raw_id(&self) -> anyhow::Result<String>;

    /// Short name of the local branch a revision resolves through
    ///
    /// Returns `None` when the revision resolves through a tag (even one sharing its
    /// name with a branch), an object id or an expression leaving the branch tip.
    fn resolved_branch(&self, revision: &str) -> anyhow::Result<Option<String>>;

    /// Every reference in the tag namespace
    fn list_tag_references(&self) -> anyhow::Result<Vec<TagRef>>;

    /// Dereference an annotated tag
    ///
    /// Returns `None` for lightweight tags, which already point at their commit.
    fn peel_annotated_tag(&self, tag: &TagRef) -> anyhow::Result<Option<PeeledTag>>;

    /// Uncommitted changes in the working tree and index
    fn working_tree_status(&self) -> anyhow::Result<WorkingTreeStatus>;
}
