use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named savings target with a deadline and a running contribution total.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: Decimal,
    pub saved: Decimal,
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target: Decimal,
    pub deadline: NaiveDate,
}

impl Goal {
    pub fn remaining(&self) -> Decimal {
        self.target - self.saved
    }

    pub fn is_funded(&self) -> bool {
        self.saved >= self.target
    }

    /// Percent of the target already saved, rounded, capped at 100.
    pub fn percent_complete(&self) -> u32 {
        if self.target <= Decimal::ZERO {
            return 100;
        }
        let percent = (self.saved / self.target) * Decimal::ONE_HUNDRED;
        percent.round().to_u32().unwrap_or(0).min(100)
    }
}
