use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::errors::{AppError, AppResult};

/// Parse `YYYY-MM-DD` + `HH:MM` (local time) into a UTC timestamp.
pub fn parse_date_time(date: &str, time: &str) -> AppResult<DateTime<Utc>> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let t = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::InvalidTime(time.to_string()))?;

    let local = Local
        .from_local_datetime(&d.and_time(t))
        .single()
        .ok_or_else(|| AppError::InvalidTime(format!("{} {}", date, time)))?;

    Ok(local.with_timezone(&Utc))
}

/// Short local rendering for tables: `2025-06-18 14:00`.
pub fn display_date_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Date-only local rendering: `2025-06-18`.
pub fn display_date(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn is_upcoming(ts: &DateTime<Utc>) -> bool {
    *ts > Utc::now()
}
