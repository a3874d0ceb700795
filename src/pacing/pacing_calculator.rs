use crate::goals::Goal;
use crate::pacing::pacing_model::Pacing;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Classifies a goal against today's date.
///
/// Completion is checked before lateness, so a goal fully funded on or
/// after its deadline is never reported overdue. Day arithmetic works on
/// calendar dates, so the result does not depend on time of day.
pub fn calculate_pacing(goal: &Goal, today: NaiveDate) -> Pacing {
    let remaining = goal.remaining();
    if remaining <= Decimal::ZERO {
        return Pacing::Complete;
    }

    let days_left = (goal.deadline - today).num_days();
    if days_left <= 0 {
        return Pacing::Overdue { remaining };
    }

    Pacing::OnTrack {
        daily_target: remaining / Decimal::from(days_left),
        days_left,
    }
}
