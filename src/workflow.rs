//! The fan-out aggregation workflow.
//!
//! Orchestrates count discovery, bounded per-index fan-out, the three-way
//! join for each index, and a single terminal delivery:
//!
//! 1. Ask the backend how many claims exist.
//! 2. For each index, fetch the primary record, blob descriptor, and
//!    status record concurrently and join them into one [`Claim`].
//! 3. Collect all claims (completion order), sort newest-first, deliver.
//!
//! The first failure anywhere fails the whole run: in-flight sibling
//! fetches are dropped and the sink receives that error instead of a
//! collection. The sink is invoked exactly once either way.

use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use crate::models::{self, Claim};
use crate::sink::ClaimSink;
use crate::source::ClaimSource;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

/// Run one aggregation pass against `source`, delivering the outcome to
/// `sink`.
///
/// On success the sink receives the complete collection of exactly `N`
/// claims sorted by timestamp descending (ties keep completion order). On
/// failure it receives the first error observed and no claims at all — a
/// partial collection is never delivered.
pub async fn run<S, K>(source: &S, sink: K, config: &WorkflowConfig)
where
    S: ClaimSource,
    K: ClaimSink,
{
    match collect(source, config).await {
        Ok(mut claims) => {
            models::sort_newest_first(&mut claims);
            info!("workflow complete: {} claims aggregated", claims.len());
            sink.deliver(claims);
        }
        Err(error) => {
            warn!("workflow failed: {}", error);
            sink.deliver_error(error);
        }
    }
}

/// Fetch and join all claims, stopping at the first error.
///
/// Returning the error drops the stream, which abandons any in-flight
/// sibling joins; their outcomes are never observed.
async fn collect<S: ClaimSource>(
    source: &S,
    config: &WorkflowConfig,
) -> Result<Vec<Claim>, WorkflowError> {
    let count = source
        .claim_count()
        .await
        .map_err(|err| WorkflowError::Count { source: err })?;
    info!("discovered {} claims", count);

    if count == 0 {
        return Ok(Vec::new());
    }

    // A zero bound would stall the stream forever.
    let max_in_flight = config.max_in_flight.max(1);

    let mut pending = stream::iter(0..count)
        .map(|index| fetch_claim(source, index))
        .buffer_unordered(max_in_flight);

    let mut claims = Vec::with_capacity(count as usize);
    while let Some(joined) = pending.next().await {
        claims.push(joined?);
    }

    Ok(claims)
}

/// Three-way join for one index.
///
/// The three sub-fetches run concurrently; the join resolves once all
/// three have succeeded and fails with the first sub-fetch error.
async fn fetch_claim<S: ClaimSource>(source: &S, index: u64) -> Result<Claim, WorkflowError> {
    let (record, blob, status) = tokio::try_join!(
        source.claim_record(index),
        source.blob_descriptor(index),
        source.status_record(index),
    )
    .map_err(|err| WorkflowError::Fetch { index, source: err })?;

    debug!("claim {} joined", index);
    Ok(Claim::assemble(record, blob, status))
}
