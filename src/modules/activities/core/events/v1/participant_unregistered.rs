use crate::shared::core::primitives::EmailAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantUnregisteredV1 {
    pub activity_name: String,
    pub email: EmailAddress,
    pub occurred_at: i64,
}
