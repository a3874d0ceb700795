use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for goal store operations
pub trait GoalStoreTrait: Send + Sync {
    fn goals(&self) -> &[Goal];
    fn open_goals(&self) -> Vec<&Goal>;
    fn total_saved(&self) -> Decimal;
    fn last_check_in(&self) -> Option<NaiveDate>;
    fn should_prompt_check_in(&self, today: NaiveDate) -> bool;
    fn add_goal(&mut self, new_goal: NewGoal) -> Result<Goal>;
    fn record_contribution(
        &mut self,
        goal_id: &str,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<Goal>;
}
