use crate::shared::core::primitives::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleActivity {
    pub activity_name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<EmailAddress>,
    pub scheduled_at: i64,
}
