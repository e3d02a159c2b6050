use crate::shared::core::primitives::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: EmailAddress,
    pub signed_up_at: i64,
}
