use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::core::primitives::EmailAddress;

pub fn sign_up_command(activity_name: &str, email: &str) -> SignUpForActivity {
    SignUpForActivity {
        activity_name: activity_name.to_string(),
        email: EmailAddress::parse(email).unwrap(),
        signed_up_at: 1_700_000_100_000,
    }
}
