use crate::shared::core::primitives::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityState {
    None,
    Scheduled {
        name: String,
        description: String,
        schedule: String,
        max_participants: u32,
        participants: Vec<EmailAddress>,
        scheduled_at: i64,
    },
}

impl ActivityState {
    pub fn is_signed_up(&self, email: &EmailAddress) -> bool {
        match self {
            ActivityState::None => false,
            ActivityState::Scheduled { participants, .. } => participants.contains(email),
        }
    }

    pub fn is_full(&self) -> bool {
        match self {
            ActivityState::None => false,
            ActivityState::Scheduled {
                max_participants,
                participants,
                ..
            } => participants.len() >= *max_participants as usize,
        }
    }
}
