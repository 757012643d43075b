//! Per-repository check outcomes.

/// Result of checking a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every dependency is current; the tracker was not touched.
    UpToDate,

    /// The tracking issue now lists the outdated dependencies.
    Reported {
        /// Tracking issue number.
        issue_number: u64,
        /// Number of outdated dependencies.
        outdated: usize,
    },

    /// Dry run: drift was found but nothing was written.
    Previewed {
        /// Number of outdated dependencies.
        outdated: usize,
    },

    /// The check aborted.
    Failed {
        /// Error message.
        error: String,
    },
}
