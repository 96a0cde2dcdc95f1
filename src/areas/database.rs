//! Object reads
//!
//! Only the parts of commits and tag objects needed to locate a revision and walk its
//! history are read: parent ids, committer time, tagger time and peel targets.

use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tags::tag_ref::{PeeledTag, TagRef};
use anyhow::Context;
use derive_new::new;
use git2::ErrorCode;

#[derive(new)]
pub struct Database<'r> {
    git: &'r git2::Repository,
}

impl Database<'_> {
    /// Resolve a revision expression and peel it to a commit
    ///
    /// Expressions that name nothing, or name something that is not a commit, resolve
    /// to `None`. So does HEAD on an unborn branch; any other HEAD failure is an error.
    pub fn resolve(&self, revision: &str) -> anyhow::Result<Option<ObjectId>> {
        if revision == HEAD_REF_NAME {
            return self.resolve_head();
        }

        let object = match self.git.revparse_single(revision) {
            Ok(object) => object,
            Err(e) if is_missing(&e) => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("unable to parse revision {revision}"));
            }
        };

        match object.peel_to_commit() {
            Ok(commit) => Ok(Some(commit.id().into())),
            Err(e) if is_missing(&e) || e.code() == ErrorCode::Peel => {
                tracing::debug!(revision, kind = ?object.kind(), "revision is not a commit");
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("unable to peel {revision} to a commit")),
        }
    }

    fn resolve_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head = match self.git.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                tracing::debug!("HEAD is unborn");
                return Ok(None);
            }
            Err(e) => return Err(e).context("unable to read HEAD"),
        };

        let commit = head
            .peel_to_commit()
            .context("unable to peel HEAD to a commit")?;

        Ok(Some(commit.id().into()))
    }

    pub fn parentage_of(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let commit = self.find_commit(commit)?;

        Ok(commit.parent_ids().map(ObjectId::from).collect())
    }

    pub fn commit_timestamp(&self, commit: &ObjectId) -> anyhow::Result<i64> {
        Ok(self.find_commit(commit)?.time().seconds())
    }

    /// Follow an annotated tag through any nested tag objects
    pub fn peel_annotated_tag(&self, tag: &TagRef) -> anyhow::Result<Option<PeeledTag>> {
        if !tag.is_annotated() {
            return Ok(None);
        }

        let tag_object = self
            .git
            .find_tag(tag.target().to_oid()?)
            .with_context(|| format!("unable to read tag object {}", tag.target()))?;
        let tagger_time = tag_object.tagger().map(|tagger| tagger.when().seconds());
        let target = tag_object
            .peel()
            .with_context(|| format!("unable to peel tag object {}", tag.target()))?;

        Ok(Some(PeeledTag::new(target.id().into(), tagger_time)))
    }

    fn find_commit(&self, commit: &ObjectId) -> anyhow::Result<git2::Commit<'_>> {
        self.git
            .find_commit(commit.to_oid()?)
            .with_context(|| format!("unable to read commit {commit}"))
    }
}

fn is_missing(error: &git2::Error) -> bool {
    matches!(
        error.code(),
        ErrorCode::NotFound | ErrorCode::UnbornBranch | ErrorCode::InvalidSpec
    )
}
