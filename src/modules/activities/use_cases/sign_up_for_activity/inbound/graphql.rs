use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::core::primitives::EmailAddress;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let email = EmailAddress::parse(&email)?;

        let command = SignUpForActivity {
            activity_name: activity_name.clone(),
            email: email.clone(),
            signed_up_at: Utc::now().timestamp_millis(),
        };
        state
            .sign_up_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.client_message()))?;

        // Inline projection so queries see the new participant immediately
        state.project(&activity_name).await?;

        Ok(format!("Signed up {email} for {activity_name}"))
    }
}
