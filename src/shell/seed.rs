use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;
use crate::shared::core::primitives::EmailAddress;
use crate::shell::config::ActivitySettings;
use crate::shell::state::AppState;

const DEFAULT_CATALOG: &str = include_str!("../../seed/activities.json");

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<EmailAddress>,
}

pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<CatalogEntry>> {
    serde_json::from_str(json).context("activity catalog is not valid JSON")
}

pub fn load_catalog(settings: &ActivitySettings) -> anyhow::Result<Vec<CatalogEntry>> {
    match &settings.seed_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read activity catalog {path}"))?;
            parse_catalog(&json)
        }
        None => parse_catalog(DEFAULT_CATALOG),
    }
}

/// Schedules every catalog entry and projects it. Entries that already exist
/// are skipped so seeding can be repeated. Returns how many were scheduled.
pub async fn seed_catalog(state: &AppState, catalog: Vec<CatalogEntry>) -> anyhow::Result<usize> {
    let mut scheduled = 0;
    for entry in catalog {
        let name = entry.name.clone();
        let command = ScheduleActivity {
            activity_name: entry.name,
            description: entry.description,
            schedule: entry.schedule,
            max_participants: entry.max_participants,
            participants: entry.participants,
            scheduled_at: Utc::now().timestamp_millis(),
        };
        match state.schedule_handler.handle(command).await {
            Ok(_) => scheduled += 1,
            Err(ApplicationError::Domain(DecideError::AlreadyScheduled)) => {
                tracing::warn!(activity = %name, "activity already scheduled, skipping");
                continue;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("failed to seed activity {name}")));
            }
        }
        state.project(&name).await?;
    }
    Ok(scheduled)
}
