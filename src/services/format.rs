//! Timestamp formatting for message headers.

use std::fmt::Display;

use chrono::{DateTime, Duration, TimeZone};

/// Format a unix timestamp relative to `now`.
///
/// Same day renders as "Today at 3:04 PM", the previous day as
/// "Yesterday at 3:04 PM", anything else as "Mar 4, 2024 at 3:04 PM".
pub fn format_timestamp<Tz>(timestamp: i64, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };
    let at = utc.with_timezone(&now.timezone());
    let time = at.format("%-I:%M %p");

    let today = now.date_naive();
    let day = at.date_naive();
    if day == today {
        format!("Today at {}", time)
    } else if Some(day) == today.checked_sub_signed(Duration::days(1)) {
        format!("Yesterday at {}", time)
    } else {
        format!("{} at {}", at.format("%b %-d, %Y"), time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap()
    }

    #[test]
    fn same_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 4, 15, 4, 0).unwrap().timestamp();
        assert_eq!(format_timestamp(ts, &now()), "Today at 3:04 PM");
    }

    #[test]
    fn previous_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 3, 9, 30, 0).unwrap().timestamp();
        assert_eq!(format_timestamp(ts, &now()), "Yesterday at 9:30 AM");
    }

    #[test]
    fn older_date() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 25, 0, 5, 0).unwrap().timestamp();
        assert_eq!(format_timestamp(ts, &now()), "Dec 25, 2023 at 12:05 AM");
    }

    #[test]
    fn out_of_range_falls_back_to_raw_value() {
        assert_eq!(format_timestamp(i64::MAX, &now()), i64::MAX.to_string());
    }
}
