//! Reverse mapping from commits to the tags pointing at them
//!
//! ## Algorithm
//!
//! Every reference under `refs/tags/` is read once. Lightweight tags describe the
//! commit they point at; annotated tags are peeled through their tag objects to the
//! commit they ultimately describe. Tags are then grouped by that commit.
//!
//! The index reflects the repository at build time and is never updated in place:
//! build a new one to observe new tags.

use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::branch::TAG_REF_PREFIX;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tags::tag_ref::IndexedTag;
use crate::errors::{ReadContext, StampResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    tags_by_commit: HashMap<ObjectId, Vec<IndexedTag>>,
}

impl TagIndex {
    /// Read and peel every tag of the repository
    ///
    /// # Errors
    ///
    /// [`crate::errors::StampError::RepositoryRead`] if the tag references cannot be
    /// listed or any single tag cannot be peeled. No partial index is returned.
    pub fn build<A>(accessor: &A) -> StampResult<Self>
    where
        A: RepositoryAccessor + ?Sized,
    {
        let tags = accessor
            .list_tag_references()
            .read_context("list tag references under", TAG_REF_PREFIX)?;

        let mut tags_by_commit: HashMap<ObjectId, Vec<IndexedTag>> = HashMap::new();
        for tag in tags {
            let peeled = accessor
                .peel_annotated_tag(&tag)
                .read_context("peel tag", tag.name())?;
            let indexed = IndexedTag::resolve(tag, peeled);

            tracing::trace!(
                tag = indexed.full_name(),
                commit = %indexed.commit(),
                version = ?indexed.version(),
                "indexed tag"
            );
            tags_by_commit
                .entry(indexed.commit().clone())
                .or_default()
                .push(indexed);
        }

        let index = TagIndex { tags_by_commit };
        tracing::debug!(
            tags = index.len(),
            commits = index.tags_by_commit.len(),
            "built tag index"
        );

        Ok(index)
    }

    /// Tags describing `commit`, in tie-break order
    pub fn tags_at(&self, commit: &ObjectId) -> Vec<&IndexedTag> {
        let mut tags = self
            .tags_by_commit
            .get(commit)
            .map(|tags| tags.iter().collect::<Vec<_>>())
            .unwrap_or_default();
        tags.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        tags
    }

    /// Short names of the tags describing `commit`, in tie-break order
    pub fn tag_names_at(&self, commit: &ObjectId) -> Vec<String> {
        self.tags_at(commit)
            .into_iter()
            .map(|tag| tag.short_name().to_string())
            .collect()
    }

    /// Number of indexed tags
    pub fn len(&self) -> usize {
        self.tags_by_commit.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tags_by_commit.is_empty()
    }
}
