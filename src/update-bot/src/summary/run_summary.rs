//! Run summary types.

use super::result::CheckOutcome;

/// Summary of a complete pass over the tracked repositories.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories checked.
    pub repositories_checked: usize,

    /// Repositories with no outdated dependencies.
    pub up_to_date: usize,

    /// Tracking issues updated with a drift report.
    pub issues_updated: usize,

    /// Drift reports previewed in dry-run mode.
    pub previewed: usize,

    /// Repositories whose check failed.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a check outcome.
    pub fn record_outcome(&mut self, outcome: &CheckOutcome) {
        self.repositories_checked += 1;
        match outcome {
            CheckOutcome::UpToDate => self.up_to_date += 1,
            CheckOutcome::Reported { .. } => self.issues_updated += 1,
            CheckOutcome::Previewed { .. } => self.previewed += 1,
            CheckOutcome::Failed { .. } => self.failed += 1,
        }
    }
}
