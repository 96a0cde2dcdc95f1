use derive_new::new;
use git2::Status;

/// Uncommitted changes of a working tree, counted per path
///
/// Untracked paths make the tree dirty; ignored paths are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct WorkingTreeStatus {
    /// Tracked paths with staged or unstaged changes
    changed: usize,
    /// Untracked paths; an untracked directory counts once
    untracked: usize,
}

impl WorkingTreeStatus {
    /// Count one path by its status flags
    pub fn record(&mut self, status: Status) {
        if status.is_wt_new() {
            self.untracked += 1;
        } else if !status.is_empty() && !status.is_ignored() {
            self.changed += 1;
        }
    }

    pub fn is_clean(&self) -> bool {
        self.changed == 0 && self.untracked == 0
    }
}
