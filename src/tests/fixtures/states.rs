use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;
use crate::modules::activities::use_cases::schedule_activity::decide::decide_schedule;

pub fn scheduled_state(command: ScheduleActivity) -> ActivityState {
    match decide_schedule(&ActivityState::None, command) {
        Decision::Accepted { events, .. } => events.into_iter().fold(ActivityState::None, evolve),
        Decision::Rejected { reason } => panic!("fixture command rejected: {reason}"),
    }
}
