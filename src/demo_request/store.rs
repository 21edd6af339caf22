use async_trait::async_trait;
use log::{error, info};
use thiserror::Error;

use super::fields::LeadRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not reach the lead store: {0}")]
    Network(String),
    #[error("lead store rejected the write ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("could not encode the lead: {0}")]
    Encode(String),
}

/// Remote persistence for demo requests. Futures are not `Send`: they run on
/// the browser's event loop.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait LeadStore {
    async fn add_lead(&self, record: &LeadRecord) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Writes the record once. Without a store the write is skipped and still
/// counts as a success.
pub async fn persist_lead(store: Option<&dyn LeadStore>, record: &LeadRecord) -> SubmissionOutcome {
    let Some(store) = store else {
        info!("No lead store configured, skipping write");
        return SubmissionOutcome::Success;
    };

    match store.add_lead(record).await {
        Ok(()) => {
            info!("Demo request stored");
            SubmissionOutcome::Success
        }
        Err(e) => {
            error!("Error submitting demo request: {}", e);
            SubmissionOutcome::Failure(e.to_string())
        }
    }
}
