use crate::constants::{CHECKIN_KEY, GOALS_KEY};
use crate::errors::{Error, Result, StorageError, ValidationError};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::GoalStoreTrait;
use crate::storage::StorageBackendTrait;
use chrono::{NaiveDate, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Authoritative in-memory list of goals, mirrored whole to the storage
/// backend on every mutation. Insertion order is display order.
pub struct GoalStore {
    backend: Arc<dyn StorageBackendTrait>,
    goals: Vec<Goal>,
    total_saved: Decimal,
    last_check_in: Option<NaiveDate>,
}

impl GoalStore {
    /// Loads persisted state from the backend. Fails soft: absent or
    /// malformed data initializes an empty collection.
    pub fn load(backend: Arc<dyn StorageBackendTrait>) -> Self {
        let goals = match backend.get(GOALS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Goal>>(&raw) {
                Ok(goals) => goals,
                Err(e) => {
                    warn!("discarding malformed goal data, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read persisted goals, starting empty: {}", e);
                Vec::new()
            }
        };

        let last_check_in = match backend.get(CHECKIN_KEY) {
            Ok(Some(raw)) => raw.parse::<NaiveDate>().ok(),
            _ => None,
        };

        let mut store = GoalStore {
            backend,
            goals,
            total_saved: Decimal::ZERO,
            last_check_in,
        };
        store.recompute_total();
        debug!("loaded {} goal(s)", store.goals.len());
        store
    }

    fn recompute_total(&mut self) {
        self.total_saved = self.goals.iter().map(|g| g.saved).sum();
    }

    /// Serializes the whole collection and overwrites the stored blob.
    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.goals).map_err(StorageError::from)?;
        self.backend.set(GOALS_KEY, &raw)?;
        self.recompute_total();
        Ok(())
    }
}

impl GoalStoreTrait for GoalStore {
    fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Goals still accepting contributions (saved below target).
    fn open_goals(&self) -> Vec<&Goal> {
        self.goals.iter().filter(|g| !g.is_funded()).collect()
    }

    fn total_saved(&self) -> Decimal {
        self.total_saved
    }

    fn last_check_in(&self) -> Option<NaiveDate> {
        self.last_check_in
    }

    fn should_prompt_check_in(&self, today: NaiveDate) -> bool {
        !self.goals.is_empty() && self.last_check_in != Some(today)
    }

    fn add_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        if new_goal.target <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "goal target must be positive, got {}",
                new_goal.target
            ))
            .into());
        }
        let name = new_goal.name.trim();
        if name.is_empty() {
            return Err(
                ValidationError::InvalidInput("goal name must not be blank".to_string()).into(),
            );
        }

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            target: new_goal.target,
            saved: Decimal::ZERO,
            deadline: new_goal.deadline,
            created_at: Utc::now(),
        };
        self.goals.push(goal.clone());
        self.persist()?;
        debug!("added goal '{}' ({})", goal.name, goal.id);
        Ok(goal)
    }

    fn record_contribution(
        &mut self,
        goal_id: &str,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<Goal> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "contribution amount must be positive, got {}",
                amount
            ))
            .into());
        }

        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::GoalNotFound(goal_id.to_string()))?;

        goal.saved += amount;
        if goal.saved > goal.target {
            goal.saved = goal.target;
        }
        let updated = goal.clone();
        self.persist()?;

        self.backend.set(CHECKIN_KEY, &today.to_string())?;
        self.last_check_in = Some(today);
        debug!(
            "recorded contribution of {} to goal {}, saved now {}",
            amount, updated.id, updated.saved
        );
        Ok(updated)
    }
}
