//! Workflow error type.
//!
//! Errors are classified by origin only. The underlying backend error is
//! carried unmodified as the source; the workflow never retries or
//! inspects it.

use thiserror::Error;

/// Terminal error of a workflow run.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Claim count discovery failed. No per-index work was started.
    #[error("failed to discover claim count")]
    Count {
        #[source]
        source: anyhow::Error,
    },

    /// One of the three sub-fetches for a claim index failed.
    #[error("failed to fetch claim {index}")]
    Fetch {
        index: u64,
        #[source]
        source: anyhow::Error,
    },
}

impl WorkflowError {
    /// The claim index the error originated from, if any.
    pub fn index(&self) -> Option<u64> {
        match self {
            WorkflowError::Count { .. } => None,
            WorkflowError::Fetch { index, .. } => Some(*index),
        }
    }
}
