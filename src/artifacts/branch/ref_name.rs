use crate::artifacts::branch::{BRANCH_REF_PREFIX, REMOTE_REF_PREFIX, TAG_REF_PREFIX};
use derive_new::new;

/// Full name of a reference, e.g. `refs/tags/v1.0` or `refs/heads/main`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct RefName(String);

impl RefName {
    /// Name with the well-known namespace prefix removed
    ///
    /// `refs/heads/main` becomes `main`, `refs/tags/v1.0` becomes `v1.0` and
    /// `refs/remotes/origin/main` becomes `origin/main`. Any other name is returned
    /// unchanged.
    pub fn short_name(&self) -> &str {
        [BRANCH_REF_PREFIX, TAG_REF_PREFIX, REMOTE_REF_PREFIX]
            .iter()
            .find_map(|prefix| self.0.strip_prefix(prefix))
            .unwrap_or(&self.0)
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
