use crate::artifacts::status::working_tree::WorkingTreeStatus;
use anyhow::Context;
use derive_new::new;

#[derive(new)]
pub struct Workspace<'r> {
    git: &'r git2::Repository,
}

impl Workspace<'_> {
    /// Staged, unstaged and untracked changes; ignored files are left out
    ///
    /// Untracked directories are reported once, not file by file.
    pub fn status(&self) -> anyhow::Result<WorkingTreeStatus> {
        let mut options = git2::StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false);

        let statuses = self
            .git
            .statuses(Some(&mut options))
            .context("unable to read working tree status")?;

        let mut status = WorkingTreeStatus::default();
        for entry in statuses.iter() {
            tracing::trace!(
                path = %String::from_utf8_lossy(entry.path_bytes()),
                flags = ?entry.status(),
                "working tree change"
            );
            status.record(entry.status());
        }

        Ok(status)
    }
}
