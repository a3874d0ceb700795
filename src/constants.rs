/// Storage key holding the serialized goal list.
pub const GOALS_KEY: &str = "lumina_goals_v1";

/// Storage key holding the date of the most recent contribution.
pub const CHECKIN_KEY: &str = "lumina_last_checkin";
