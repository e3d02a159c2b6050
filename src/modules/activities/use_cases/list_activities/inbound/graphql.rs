use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl From<ActivityView> for GqlActivity {
    fn from(v: ActivityView) -> Self {
        let taken = u32::try_from(v.participants.len()).unwrap_or(u32::MAX);
        Self {
            spots_left: v.max_participants.saturating_sub(taken),
            name: v.activity_name,
            description: v.description,
            schedule: v.schedule,
            max_participants: v.max_participants,
            participants: v.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let catalog = state.queries.list_activities().await?;
        Ok(catalog.0.into_iter().map(Into::into).collect())
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> GqlResult<Option<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.queries.get_activity(&name).await?.map(Into::into))
    }
}
