use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::describe::describe_commit;
use crate::artifacts::describe::description::Description;
use crate::artifacts::situation::situation_info::Situation;
use crate::artifacts::situation::situation_at;
use crate::artifacts::tags::pattern::TagPattern;
use crate::artifacts::tags::tag_index::TagIndex;
use crate::errors::StampResult;
use serde::Serialize;

/// Situation and description of the same revision, read against one tag index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stamp {
    situation: Situation,
    description: Description,
}

impl Stamp {
    /// # Errors
    ///
    /// Everything [`crate::artifacts::situation::resolve_situation`] and
    /// [`crate::artifacts::describe::describe`] can fail with.
    pub fn resolve<A>(
        accessor: &A,
        revision: &Revision,
        pattern: &TagPattern,
        max_depth: Option<usize>,
    ) -> StampResult<Self>
    where
        A: RepositoryAccessor + ?Sized,
    {
        let Some(commit) = revision.resolve(accessor)? else {
            return Ok(Stamp {
                situation: situation_at(accessor, &TagIndex::default(), revision, None)?,
                description: Description::empty(),
            });
        };

        let index = TagIndex::build(accessor)?;
        let situation = situation_at(accessor, &index, revision, Some(commit.clone()))?;
        let description = describe_commit(accessor, &index, commit, pattern, max_depth)?;

        Ok(Stamp {
            situation,
            description,
        })
    }

    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}
