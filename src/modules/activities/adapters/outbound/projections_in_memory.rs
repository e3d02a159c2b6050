// In memory projection repository and watermark repository.
//
// Rows are kept in scheduling order so listings come back the way the catalog
// was built.

use crate::modules::activities::adapters::outbound::projections::{
    ActivityProjectionRepository, WatermarkRepository,
};
use crate::modules::activities::use_cases::list_activities::projection::{
    ActivityCatalog, ActivityRow, ActivityView,
};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use anyhow::anyhow;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<Vec<ActivityRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow!("{what} repository offline"));
        }
        Ok(())
    }

    async fn update_row<F>(
        &self,
        activity_name: &str,
        version: i64,
        occurred_at: i64,
        change: F,
    ) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Vec<String>) + Send,
    {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .iter_mut()
            .find(|r| r.activity_name == activity_name)
            .ok_or_else(|| anyhow!("no projected row for activity {activity_name}"))?;
        if version <= row.version {
            return Ok(());
        }
        change(&mut row.participants);
        row.version = version;
        row.updated_at = occurred_at;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: ActivityRow) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        match guard
            .iter_mut()
            .find(|r| r.activity_name == row.activity_name)
        {
            Some(existing) if existing.version >= row.version => {}
            Some(existing) => *existing = row,
            None => guard.push(row),
        }
        Ok(())
    }

    async fn add_participant(
        &self,
        activity_name: &str,
        email: &str,
        version: i64,
        occurred_at: i64,
    ) -> anyhow::Result<()> {
        self.update_row(activity_name, version, occurred_at, |participants| {
            if !participants.iter().any(|p| p == email) {
                participants.push(email.to_string());
            }
        })
        .await
    }

    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
        version: i64,
        occurred_at: i64,
    ) -> anyhow::Result<()> {
        self.update_row(activity_name, version, occurred_at, |participants| {
            participants.retain(|p| p != email);
        })
        .await
    }

    async fn version_of(&self, activity_name: &str) -> anyhow::Result<Option<i64>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|r| r.activity_name == activity_name)
            .map(|r| r.version))
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryProjections {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog> {
        self.ensure_online("Projections")?;
        let guard = self.rows.read().await;
        Ok(ActivityCatalog(
            guard.iter().cloned().map(ActivityView::from).collect(),
        ))
    }

    async fn get_activity(&self, activity_name: &str) -> anyhow::Result<Option<ActivityView>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|r| r.activity_name == activity_name)
            .cloned()
            .map(ActivityView::from))
    }
}
