use crate::modules::activities::core::{
    decision::{DecideError, Decision},
    events::{ActivityEvent, v1::activity_scheduled::ActivityScheduledV1},
    intents::ActivityIntent,
    state::ActivityState,
};
use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;
use std::collections::HashSet;

pub fn decide_schedule(state: &ActivityState, command: ScheduleActivity) -> Decision {
    let ActivityState::None = state else {
        return Decision::Rejected {
            reason: DecideError::AlreadyScheduled,
        };
    };
    if let Err(reason) = validate(&command) {
        return Decision::Rejected { reason };
    }
    let payload = ActivityScheduledV1 {
        activity_name: command.activity_name,
        description: command.description,
        schedule: command.schedule,
        max_participants: command.max_participants,
        participants: command.participants,
        occurred_at: command.scheduled_at,
    };
    Decision::Accepted {
        events: vec![ActivityEvent::ActivityScheduledV1(payload.clone())],
        intents: vec![ActivityIntent::PublishActivityScheduled { payload }],
    }
}

fn validate(command: &ScheduleActivity) -> Result<(), DecideError> {
    if command.activity_name.trim().is_empty() {
        return Err(DecideError::MissingName);
    }
    if command.max_participants == 0 {
        return Err(DecideError::InvalidCapacity);
    }
    let mut seen = HashSet::new();
    if !command.participants.iter().all(|p| seen.insert(p)) {
        return Err(DecideError::DuplicateParticipant);
    }
    if command.participants.len() > command.max_participants as usize {
        return Err(DecideError::OverCapacity);
    }
    Ok(())
}
