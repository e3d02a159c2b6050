use crate::shared::core::primitives::EmailAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityScheduledV1 {
    pub activity_name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<EmailAddress>,
    pub occurred_at: i64,
}
