//! Claimfan - bounded parallel fan-out claim aggregation.
//!
//! A leaf utility for slow, request/response-only claim backends:
//! discover how many claims exist, fetch the three sub-records of every
//! claim concurrently (bounded fan-out), join them into aggregate
//! [`Claim`]s, sort newest-first, and hand the whole collection — or the
//! first error — to a single-shot sink, exactly once.
//!
//! The caller supplies the backend as a [`ClaimSource`] and receives the
//! outcome through a [`ClaimSink`]. A `tokio::sync::oneshot::Sender`
//! works as a sink out of the box:
//!
//! ```rust,ignore
//! let (tx, rx) = tokio::sync::oneshot::channel();
//! claimfan::run(&backend, tx, &WorkflowConfig::default()).await;
//! let claims = rx.await??;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod sink;
pub mod source;
pub mod workflow;

pub use config::WorkflowConfig;
pub use error::WorkflowError;
pub use models::{sort_newest_first, BlobDescriptor, Claim, ClaimRecord, ClaimState, StatusRecord};
pub use sink::{ClaimSink, LoggingSink};
pub use source::ClaimSource;
pub use workflow::run;
