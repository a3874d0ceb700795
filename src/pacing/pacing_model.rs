use rust_decimal::Decimal;
use serde::Serialize;

/// Pacing verdict for one goal at a point in time.
///
/// `daily_target` is deliberately unrounded; ceiling it for display is the
/// presentation layer's concern.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Pacing {
    /// Goal fully funded, regardless of the deadline.
    Complete,
    /// Deadline passed with money still owed.
    #[serde(rename_all = "camelCase")]
    Overdue { remaining: Decimal },
    /// Deadline ahead; save `daily_target` per day to land on time.
    #[serde(rename_all = "camelCase")]
    OnTrack {
        daily_target: Decimal,
        days_left: i64,
    },
}
