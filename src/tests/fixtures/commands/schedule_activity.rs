// Shared test fixture for the ScheduleActivity command, seeded from JSON.

use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;
use crate::shared::core::primitives::EmailAddress;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleActivityDto {
    pub activity_name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<EmailAddress>,
}

pub struct ScheduleActivityBuilder {
    inner: ScheduleActivity,
}

impl Default for ScheduleActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleActivityBuilder {
    pub fn new() -> Self {
        let dto: ScheduleActivityDto =
            serde_json::from_str(include_str!("json/schedule_activity.json")).unwrap();

        Self {
            inner: ScheduleActivity {
                activity_name: dto.activity_name,
                description: dto.description,
                schedule: dto.schedule,
                max_participants: dto.max_participants,
                participants: dto.participants,
                scheduled_at: 1_700_000_000_000,
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: Vec<EmailAddress>) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn participant_emails(self, v: &[&str]) -> Self {
        let emails = v
            .iter()
            .map(|raw| EmailAddress::parse(raw).unwrap())
            .collect();
        self.participants(emails)
    }

    pub fn build(self) -> ScheduleActivity {
        self.inner
    }
}

#[cfg(test)]
mod schedule_activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ScheduleActivityBuilder::default().build();
        assert_eq!(built.activity_name, "Chess Club");
        assert_eq!(built.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(built.max_participants, 12);
        assert_eq!(built.participants[0].as_str(), "michael@mergington.edu");
        assert_eq!(built.scheduled_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ScheduleActivityBuilder::new()
            .activity_name("Art & Design Club")
            .description("Creative arts and design")
            .schedule("Fridays, 3:00 PM")
            .max_participants(10)
            .participant_emails(&["test@mergington.edu"])
            .build();

        assert_eq!(custom.activity_name, "Art & Design Club");
        assert_eq!(custom.description, "Creative arts and design");
        assert_eq!(custom.schedule, "Fridays, 3:00 PM");
        assert_eq!(custom.max_participants, 10);
        assert_eq!(custom.participants.len(), 1);
    }
}
