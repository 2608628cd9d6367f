//! Abstract claim backend.

use crate::models::{BlobDescriptor, ClaimRecord, StatusRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Request/response access to the claim backend.
///
/// Implementations wrap whatever transport actually serves the data; the
/// workflow treats every call as slow and issues them concurrently.
/// Errors are propagated as-is — no retry, no classification.
#[async_trait]
pub trait ClaimSource: Send + Sync {
    /// Number of claims available.
    ///
    /// Called exactly once per run, strictly before any per-index fetch.
    async fn claim_count(&self) -> Result<u64>;

    /// Primary record for one claim index.
    async fn claim_record(&self, index: u64) -> Result<ClaimRecord>;

    /// Content-addressed blob descriptor for one claim index.
    async fn blob_descriptor(&self, index: u64) -> Result<BlobDescriptor>;

    /// Status record for one claim index.
    async fn status_record(&self, index: u64) -> Result<StatusRecord>;
}
