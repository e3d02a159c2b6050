use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::EmailAddress;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let email = EmailAddress::parse(&email)?;

        let command = UnregisterFromActivity {
            activity_name: activity_name.clone(),
            email: email.clone(),
            unregistered_at: Utc::now().timestamp_millis(),
        };
        state
            .unregister_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.client_message()))?;
        state.project(&activity_name).await?;

        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}
