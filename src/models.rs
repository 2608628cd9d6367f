//! Data models for claim aggregation.
//!
//! This module contains the three per-index sub-results returned by the
//! backend and the aggregate `Claim` record they are joined into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimState {
    /// Submitted but not yet picked up for evaluation.
    Submitted,
    /// Under evaluation.
    InReview,
    /// Approved for payout.
    Approved,
    /// Rejected.
    Rejected,
}

impl fmt::Display for ClaimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimState::Submitted => write!(f, "Submitted"),
            ClaimState::InReview => write!(f, "In Review"),
            ClaimState::Approved => write!(f, "Approved"),
            ClaimState::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Primary claim record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Backend identifier of the claim.
    pub id: u64,
    /// Claimed amount in minor currency units.
    pub amount: u64,
    /// When the claim was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Content-addressed descriptor of the document attached to a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobDescriptor {
    /// Digest of the blob content.
    pub hash: String,
    /// Identifier of the hash algorithm that produced the digest.
    pub hash_type: String,
}

/// Status record for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Current processing state.
    pub state: ClaimState,
    /// Processing progress, 0-100.
    pub percentage: u8,
}

/// Aggregate claim: the three sub-results for one index joined into a
/// single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Backend identifier of the claim.
    pub id: u64,
    /// Claimed amount in minor currency units.
    pub amount: u64,
    /// Digest of the attached document.
    pub hash: String,
    /// Identifier of the hash algorithm that produced the digest.
    pub hash_type: String,
    /// Current processing state.
    pub state: ClaimState,
    /// Processing progress, 0-100.
    pub percentage: u8,
    /// When the claim was recorded. Used only for final ordering.
    pub timestamp: DateTime<Utc>,
}

impl Claim {
    /// Joins the three sub-results for one index into an aggregate claim.
    pub fn assemble(record: ClaimRecord, blob: BlobDescriptor, status: StatusRecord) -> Self {
        Self {
            id: record.id,
            amount: record.amount,
            hash: blob.hash,
            hash_type: blob.hash_type,
            state: status.state,
            percentage: status.percentage,
            timestamp: record.timestamp,
        }
    }
}

/// Sort claims by timestamp, newest first.
///
/// The sort is stable: claims with equal timestamps keep their relative
/// order.
pub fn sort_newest_first(claims: &mut [Claim]) {
    claims.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claim(id: u64, timestamp_secs: i64) -> Claim {
        Claim {
            id,
            amount: 1000,
            hash: format!("Qm{}", id),
            hash_type: "sha2-256".to_string(),
            state: ClaimState::InReview,
            percentage: 50,
            timestamp: DateTime::from_timestamp(timestamp_secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_claim_state_display() {
        assert_eq!(ClaimState::Submitted.to_string(), "Submitted");
        assert_eq!(ClaimState::InReview.to_string(), "In Review");
        assert_eq!(ClaimState::Approved.to_string(), "Approved");
        assert_eq!(ClaimState::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_assemble_joins_all_fields() {
        let record = ClaimRecord {
            id: 7,
            amount: 2500,
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let blob = BlobDescriptor {
            hash: "QmAbc".to_string(),
            hash_type: "sha2-256".to_string(),
        };
        let status = StatusRecord {
            state: ClaimState::Approved,
            percentage: 100,
        };

        let claim = Claim::assemble(record.clone(), blob, status);

        assert_eq!(claim.id, 7);
        assert_eq!(claim.amount, 2500);
        assert_eq!(claim.hash, "QmAbc");
        assert_eq!(claim.hash_type, "sha2-256");
        assert_eq!(claim.state, ClaimState::Approved);
        assert_eq!(claim.percentage, 100);
        assert_eq!(claim.timestamp, record.timestamp);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut claims = vec![
            create_test_claim(0, 10),
            create_test_claim(1, 30),
            create_test_claim(2, 20),
        ];

        sort_newest_first(&mut claims);

        let ids: Vec<u64> = claims.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_timestamps() {
        let mut claims = vec![
            create_test_claim(0, 20),
            create_test_claim(1, 10),
            create_test_claim(2, 20),
            create_test_claim(3, 20),
        ];

        sort_newest_first(&mut claims);

        // Claims 0, 2, 3 share a timestamp and must keep their order.
        let ids: Vec<u64> = claims.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 2, 3, 1]);
    }
}
