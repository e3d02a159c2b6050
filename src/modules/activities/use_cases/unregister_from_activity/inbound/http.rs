use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use chrono::Utc;

use crate::modules::activities::adapters::inbound::http_responses::{
    EmailQuery, HttpError, MessageResponse,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::EmailAddress;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<MessageResponse>, HttpError> {
    let params = EmailQuery::from_raw(query.as_deref())?;
    let email = EmailAddress::parse(&params.email)?;

    let command = UnregisterFromActivity {
        activity_name: activity_name.clone(),
        email: email.clone(),
        unregistered_at: Utc::now().timestamp_millis(),
    };
    let (stream_id, version) = state.unregister_handler.handle(command).await?;
    state
        .project(&activity_name)
        .await
        .map_err(HttpError::internal)?;

    tracing::info!(stream_id = %stream_id, version, "participant unregistered");
    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}
