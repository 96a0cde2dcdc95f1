//! References: HEAD, local branches and tags
//!
//! HEAD is either symbolic (pointing at `refs/heads/<branch>`, possibly a branch
//! without commits yet) or detached (holding a commit id directly).

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::branch::{BRANCH_REF_PREFIX, HEAD_REF_NAME, TAG_REF_PREFIX};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tags::tag_ref::TagRef;
use anyhow::Context;
use chrono::{DateTime, Utc};
use derive_new::new;
use git2::{ErrorCode, ObjectType};

#[derive(new)]
pub struct Refs<'r> {
    git: &'r git2::Repository,
}

impl Refs<'_> {
    /// Short name of the checked-out branch, or the commit id of a detached HEAD
    pub fn current_branch_name_or_raw_id(&self) -> anyhow::Result<String> {
        match self.git.head() {
            Ok(head) if head.is_branch() => head
                .shorthand()
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("HEAD points at a branch with a non UTF-8 name")),
            Ok(head) => head
                .target()
                .map(|oid| ObjectId::from(oid).to_string())
                .ok_or_else(|| anyhow::anyhow!("HEAD does not point at an object")),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                self.unborn_branch_name()
            }
            Err(e) => Err(e).context("unable to read HEAD"),
        }
    }

    /// Short name of the local branch `revision` resolves through
    ///
    /// Reference lookup tries tags before branches, so a tag shadows a branch of the
    /// same name. Expressions that move away from the branch tip (`main~1`) resolve
    /// through no branch.
    pub fn resolved_branch(&self, revision: &str) -> anyhow::Result<Option<String>> {
        let (object, reference) = match self.git.revparse_ext(revision) {
            Ok(resolved) => resolved,
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("unable to parse revision {revision}"));
            }
        };

        let Some(reference) = reference.filter(|reference| reference.is_branch()) else {
            return Ok(None);
        };
        if reference.target() != Some(object.id()) {
            return Ok(None);
        }

        Ok(reference.shorthand().map(str::to_string))
    }

    /// Every reference under `refs/tags/`, nested names included
    pub fn list_tag_references(&self) -> anyhow::Result<Vec<TagRef>> {
        let references = self
            .git
            .references()
            .context("unable to list references")?;

        let mut tags = Vec::new();
        for reference in references {
            let reference = reference.context("unable to read reference")?;
            let Some(name) = reference.name().filter(|name| name.starts_with(TAG_REF_PREFIX))
            else {
                continue;
            };

            let target = reference
                .resolve()
                .ok()
                .and_then(|resolved| resolved.target())
                .with_context(|| format!("tag {name} does not point at an object"))?;
            let annotated = self
                .git
                .find_object(target, None)
                .with_context(|| format!("unable to read object {target} of tag {name}"))?
                .kind()
                == Some(ObjectType::Tag);

            tags.push(TagRef::new(
                RefName::new(name.to_string()),
                target.into(),
                annotated,
                self.updated_at(name),
            ));
        }

        Ok(tags)
    }

    fn unborn_branch_name(&self) -> anyhow::Result<String> {
        let head = self
            .git
            .find_reference(HEAD_REF_NAME)
            .context("unable to read HEAD")?;
        let target = head
            .symbolic_target()
            .ok_or_else(|| anyhow::anyhow!("HEAD is neither symbolic nor pointing at a commit"))?;

        Ok(target
            .strip_prefix(BRANCH_REF_PREFIX)
            .unwrap_or(target)
            .to_string())
    }

    /// Modification time of the loose reference file; packed references have none
    ///
    /// Tags live in the common directory, which a linked worktree shares with the
    /// main checkout instead of keeping its own.
    fn updated_at(&self, name: &str) -> Option<i64> {
        let modified = std::fs::metadata(self.git.commondir().join(name))
            .and_then(|metadata| metadata.modified())
            .ok()?;

        Some(DateTime::<Utc>::from(modified).timestamp())
    }
}
