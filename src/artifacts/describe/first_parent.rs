use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ReadContext, StampResult};
use std::iter::FusedIterator;

enum Cursor {
    /// The start commit has not been yielded yet
    Start(ObjectId),
    /// The last yielded commit; its parents are read on the next step
    After(ObjectId),
    Done,
}

/// Walk along first parents, starting with the start commit itself
///
/// Parents are read lazily: a consumer that stops after `n` commits has caused
/// `n - 1` parent reads. A failed read is yielded once, after which the walk ends.
pub struct FirstParentWalk<'r, A: ?Sized> {
    accessor: &'r A,
    cursor: Cursor,
}

impl<'r, A> FirstParentWalk<'r, A>
where
    A: RepositoryAccessor + ?Sized,
{
    pub fn new(accessor: &'r A, start: ObjectId) -> Self {
        FirstParentWalk {
            accessor,
            cursor: Cursor::Start(start),
        }
    }
}

impl<A> Iterator for FirstParentWalk<'_, A>
where
    A: RepositoryAccessor + ?Sized,
{
    type Item = StampResult<ObjectId>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Done => None,
            Cursor::Start(commit) => {
                self.cursor = Cursor::After(commit.clone());
                Some(Ok(commit))
            }
            Cursor::After(commit) => {
                let parents = match self
                    .accessor
                    .parentage_of(&commit)
                    .read_context("read parents of commit", &commit)
                {
                    Ok(parents) => parents,
                    Err(e) => return Some(Err(e)),
                };

                let parent = parents.into_iter().next()?;
                self.cursor = Cursor::After(parent.clone());
                Some(Ok(parent))
            }
        }
    }
}

impl<A> FusedIterator for FirstParentWalk<'_, A> where A: RepositoryAccessor + ?Sized {}
