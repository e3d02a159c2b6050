use crate::modules::activities::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

impl ApplicationError {
    /// Text safe to show to API clients. Infrastructure details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ApplicationError::Domain(reason) => reason.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
