use crate::artifacts::branch::{HEAD_REF_NAME, INVALID_REVISION_REGEX, REF_ALIASES};
use crate::artifacts::core::accessor::RepositoryAccessor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{ReadContext, StampError, StampResult};
use anyhow::Context;
use std::str::FromStr;

/// A revision specification naming the commit to inspect.
///
/// Two shapes are distinguished because they fail differently:
/// - `Head`: the checked-out revision (`HEAD` or its alias `@`). A repository without
///   commits has an unborn HEAD, which resolves to nothing instead of failing.
/// - `Spec`: anything else the repository understands, such as branch and tag names,
///   full or abbreviated object ids, `main~3` or `v1.0^`. Failing to resolve one of
///   these is a [`StampError::RevisionNotFound`].
///
/// # Examples
///
/// ```ignore
/// let head = Revision::try_parse("@")?;
/// assert_eq!(head, Revision::Head);
///
/// let release = Revision::try_parse("release/2.x~1")?;
/// assert_eq!(release.as_str(), "release/2.x~1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Revision {
    /// The currently checked-out revision
    #[default]
    Head,
    /// Any other revision string
    Spec(String),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        if revision.is_empty() {
            anyhow::bail!("revision cannot be empty");
        }

        let re = regex::Regex::new(INVALID_REVISION_REGEX)
            .with_context(|| format!("invalid revision regex: {INVALID_REVISION_REGEX}"))?;
        if re.is_match(revision) {
            anyhow::bail!("invalid revision: {:?}", revision);
        }

        let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
        if resolved_name == HEAD_REF_NAME {
            Ok(Revision::Head)
        } else {
            Ok(Revision::Spec(revision.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Revision::Head => HEAD_REF_NAME,
            Revision::Spec(spec) => spec,
        }
    }

    /// Resolve the revision to the commit it designates
    ///
    /// # Returns
    ///
    /// - `Some(commit)` when the revision resolves
    /// - `None` when the revision is HEAD and the repository has no commits yet
    ///
    /// # Errors
    ///
    /// [`StampError::RevisionNotFound`] for any other revision that does not resolve,
    /// [`StampError::RepositoryRead`] when the repository cannot be read.
    pub fn resolve<A>(&self, accessor: &A) -> StampResult<Option<ObjectId>>
    where
        A: RepositoryAccessor + ?Sized,
    {
        let resolved = accessor
            .resolve(self.as_str())
            .read_context("resolve revision", self)?;

        match (resolved, self) {
            (Some(commit), _) => Ok(Some(commit)),
            (None, Revision::Head) => {
                tracing::debug!("HEAD does not point at a commit yet");
                Ok(None)
            }
            (None, Revision::Spec(spec)) => Err(StampError::RevisionNotFound {
                revision: spec.clone(),
            }),
        }
    }
}

impl FromStr for Revision {
    type Err = anyhow::Error;

    fn from_str(revision: &str) -> Result<Self, Self::Err> {
        Self::try_parse(revision)
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
