//! Snapshot of a repository at a revision
//!
//! A situation combines the resolved commit, its committer time, the branch, the
//! tags pointing at the commit and whether the working tree is clean.
//!
//! ## Components
//!
//! - `situation_info`: the immutable snapshot
//! - `stamp`: situation and description computed together

pub mod situation_info;
pub mod stamp;

use crate::artifacts::branch::revision::Revision;
use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::situation::situation_info::Situation;
use crate::artifacts::tags::tag_index::TagIndex;
use crate::errors::{ReadContext, StampResult};

/// Resolve where the repository stands at `revision`
///
/// A repository without commits is reported with the all-zero hash, timestamp 0
/// and no tags when `revision` is HEAD.
///
/// # Errors
///
/// - [`crate::errors::StampError::RevisionNotFound`] when a non-HEAD revision does not resolve
/// - [`crate::errors::StampError::RepositoryRead`] when any repository read fails, including
///   the status read of a repository without a working tree
pub fn resolve_situation<A>(accessor: &A, revision: &Revision) -> StampResult<Situation>
where
    A: RepositoryAccessor + ?Sized,
{
    let commit = revision.resolve(accessor)?;
    let index = match commit {
        Some(_) => TagIndex::build(accessor)?,
        None => TagIndex::default(),
    };

    situation_at(accessor, &index, revision, commit)
}

/// Assemble the situation of an already resolved revision
pub fn situation_at<A>(
    accessor: &A,
    index: &TagIndex,
    revision: &Revision,
    commit: Option<ObjectId>,
) -> StampResult<Situation>
where
    A: RepositoryAccessor + ?Sized,
{
    let (hash, timestamp, tags) = match commit {
        Some(commit) => {
            let timestamp = accessor
                .commit_timestamp(&commit)
                .read_context("read timestamp of commit", &commit)?;
            let tags = index.tag_names_at(&commit);
            (commit, timestamp, tags)
        }
        None => (ObjectId::no_commit(), 0, Vec::new()),
    };

    let branch = branch_of(accessor, revision)?;
    let status = accessor
        .working_tree_status()
        .read_context("read working tree status of", revision)?;

    tracing::debug!(
        hash = %hash,
        timestamp,
        branch = ?branch,
        tags = ?tags,
        status = ?status,
        "resolved situation"
    );

    Ok(Situation::new(hash, timestamp, branch, tags, status.is_clean()))
}

fn branch_of<A>(accessor: &A, revision: &Revision) -> StampResult<Option<String>>
where
    A: RepositoryAccessor + ?Sized,
{
    match revision {
        Revision::Head => {
            let name = accessor
                .current_branch_name_or_raw_id()
                .read_context("read current branch of", HEAD_REF_NAME)?;

            Ok(match ObjectId::try_parse(name.clone()) {
                Ok(_) => None,
                Err(_) => Some(name),
            })
        }
        Revision::Spec(spec) => accessor
            .resolved_branch(spec)
            .read_context("look up branch of", spec),
    }
}
