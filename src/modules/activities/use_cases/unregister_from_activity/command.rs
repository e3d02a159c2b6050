use crate::shared::core::primitives::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity_name: String,
    pub email: EmailAddress,
    pub unregistered_at: i64,
}
