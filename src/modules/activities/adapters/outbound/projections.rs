use crate::modules::activities::use_cases::list_activities::projection::ActivityRow;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityProjectionRepository: Send + Sync {
    async fn upsert(&self, row: ActivityRow) -> anyhow::Result<()>;

    async fn add_participant(
        &self,
        activity_name: &str,
        email: &str,
        version: i64,
        occurred_at: i64,
    ) -> anyhow::Result<()>;

    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
        version: i64,
        occurred_at: i64,
    ) -> anyhow::Result<()>;

    /// Stream version the stored row reflects, if the activity is projected.
    async fn version_of(&self, activity_name: &str) -> anyhow::Result<Option<i64>>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
