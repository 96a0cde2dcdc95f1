use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::working_tree::WorkingTreeStatus;
use crate::artifacts::tags::tag_ref::{PeeledTag, TagRef};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    git: git2::Repository,
}

impl Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("invalid repository path: {path}"))?;

        let git = git2::Repository::discover(&path)
            .with_context(|| format!("not a git repository: {}", path.display()))?;
        tracing::debug!(
            git_dir = %git.path().display(),
            bare = git.is_bare(),
            "opened repository"
        );

        Ok(Repository {
            writer: RefCell::new(writer),
            git,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> Database<'_> {
        Database::new(&self.git)
    }

    pub fn refs(&self) -> Refs<'_> {
        Refs::new(&self.git)
    }

    pub fn workspace(&self) -> Workspace<'_> {
        Workspace::new(&self.git)
    }
}

impl RepositoryAccessor for Repository {
    fn resolve(&self, revision: &str) -> anyhow::Result<Option<ObjectId>> {
        self.database().resolve(revision)
    }

    fn parentage_of(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        self.database().parentage_of(commit)
    }

    fn commit_timestamp(&self, commit: &ObjectId) -> anyhow::Result<i64> {
        self.database().commit_timestamp(commit)
    }

    fn current_branch_name_or_raw_id(&self) -> anyhow::Result<String> {
        self.refs().current_branch_name_or_raw_id()
    }

    fn resolved_branch(&self, revision: &str) -> anyhow::Result<Option<String>> {
        self.refs().resolved_branch(revision)
    }

    fn list_tag_references(&self) -> anyhow::Result<Vec<TagRef>> {
        self.refs().list_tag_references()
    }

    fn peel_annotated_tag(&self, tag: &TagRef) -> anyhow::Result<Option<PeeledTag>> {
        self.database().peel_annotated_tag(tag)
    }

    fn working_tree_status(&self) -> anyhow::Result<WorkingTreeStatus> {
        self.workspace().status()
    }
}
