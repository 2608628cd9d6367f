//! Terminal delivery of a workflow run.

use crate::error::WorkflowError;
use crate::models::Claim;
use tracing::{error, info};

/// Single-shot outcome delivery.
///
/// A run ends with exactly one of the two calls. Both methods take `self`
/// by value, so a sink cannot be invoked twice.
pub trait ClaimSink {
    /// Receive the complete collection, sorted newest-first.
    fn deliver(self, claims: Vec<Claim>);

    /// Receive the first error observed.
    fn deliver_error(self, error: WorkflowError);
}

/// A `oneshot::Sender` is a sink: the caller keeps the receiver and awaits
/// the outcome.
impl ClaimSink for tokio::sync::oneshot::Sender<Result<Vec<Claim>, WorkflowError>> {
    fn deliver(self, claims: Vec<Claim>) {
        // The receiver may already be gone; there is nobody left to tell.
        let _ = self.send(Ok(claims));
    }

    fn deliver_error(self, error: WorkflowError) {
        let _ = self.send(Err(error));
    }
}

/// Sink wrapper that logs the outcome before forwarding it.
///
/// Logging is observation only and never changes what the inner sink sees.
pub struct LoggingSink<K>(pub K);

impl<K: ClaimSink> ClaimSink for LoggingSink<K> {
    fn deliver(self, claims: Vec<Claim>) {
        info!("delivering {} claims", claims.len());
        self.0.deliver(claims);
    }

    fn deliver_error(self, error: WorkflowError) {
        error!("claim workflow failed: {}", error);
        self.0.deliver_error(error);
    }
}
