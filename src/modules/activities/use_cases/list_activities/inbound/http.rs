use axum::{Json, extract::State};

use crate::modules::activities::adapters::inbound::http_responses::HttpError;
use crate::modules::activities::use_cases::list_activities::projection::ActivityCatalog;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<ActivityCatalog>, HttpError> {
    let catalog = state
        .queries
        .list_activities()
        .await
        .map_err(HttpError::internal)?;
    Ok(Json(catalog))
}
