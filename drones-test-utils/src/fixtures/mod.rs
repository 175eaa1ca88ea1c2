//! Database fixture helpers, grouped by domain.
//!
//! - `user` - users, passwords and auth tokens
//! - `drone` - drone categories and drones
//! - `pilot` - pilots and their competitions

pub mod drone;
pub mod pilot;
pub mod user;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed reference date offset by `days`, for deterministic date fields.
pub fn mock_date(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap() + Duration::days(days)
}
