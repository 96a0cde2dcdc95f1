//! Nearest tag along the first-parent chain
//!
//! ## Algorithm
//!
//! Starting from the resolved revision, commits are visited along first parents
//! only (merged-in side branches are never entered). The start commit has depth 0
//! and every step back adds one. At each commit the tags pointing at it are put in
//! tie-break order and the first one whose short name matches the pattern wins.
//!
//! Without a match the walk runs until the root commit, or until the optional depth
//! ceiling, and reports how deep it went.
//!
//! ## Components
//!
//! - `description`: the walk result and its `git describe`-style rendering
//! - `first_parent`: the lazy first-parent iterator

pub mod description;
pub mod first_parent;

use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::describe::description::Description;
use crate::artifacts::describe::first_parent::FirstParentWalk;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tags::pattern::TagPattern;
use crate::artifacts::tags::tag_index::TagIndex;
use crate::errors::StampResult;

/// Describe `revision` by its nearest first-parent ancestor tag matching `pattern`
///
/// `max_depth` bounds the walk: commits up to that many steps back are inspected.
///
/// # Returns
///
/// [`Description::empty`] when `revision` is HEAD and the repository has no commits.
///
/// # Errors
///
/// - [`crate::errors::StampError::RevisionNotFound`] when any other revision does not resolve
/// - [`crate::errors::StampError::RepositoryRead`] when tags or parents cannot be read
pub fn describe<A>(
    accessor: &A,
    revision: &Revision,
    pattern: &TagPattern,
    max_depth: Option<usize>,
) -> StampResult<Description>
where
    A: RepositoryAccessor + ?Sized,
{
    let Some(start) = revision.resolve(accessor)? else {
        return Ok(Description::empty());
    };

    let index = TagIndex::build(accessor)?;
    describe_commit(accessor, &index, start, pattern, max_depth)
}

/// Describe an already resolved commit against a prebuilt tag index
pub fn describe_commit<A>(
    accessor: &A,
    index: &TagIndex,
    start: ObjectId,
    pattern: &TagPattern,
    max_depth: Option<usize>,
) -> StampResult<Description>
where
    A: RepositoryAccessor + ?Sized,
{
    let limit = max_depth.map_or(usize::MAX, |ceiling| ceiling.saturating_add(1));
    let mut walked = 0;

    for (depth, commit) in FirstParentWalk::new(accessor, start.clone())
        .take(limit)
        .enumerate()
    {
        let commit = commit?;
        walked = depth + 1;

        let matched = index
            .tags_at(&commit)
            .into_iter()
            .find(|tag| pattern.matches(tag.short_name()));

        if let Some(tag) = matched {
            tracing::debug!(
                start = %start,
                tag = tag.full_name(),
                depth,
                "found matching tag"
            );
            return Ok(Description::new(start, Some(tag.full_name().to_string()), depth));
        }

        tracing::trace!(commit = %commit, depth, "no matching tag");
    }

    tracing::debug!(start = %start, walked, pattern = %pattern, "no matching tag on first-parent chain");
    Ok(Description::new(start, None, walked.saturating_sub(1)))
}
