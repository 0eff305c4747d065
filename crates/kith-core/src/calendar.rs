//! Calendar-day arithmetic in the user's local zone.
//!
//! Everything here works on local dates: the time of day and the zone offset
//! are discarded before comparing, so a pick made at 23:59 is stale one minute
//! later, while a pick made at 00:01 stays valid until midnight.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};

/// Whole calendar days from `earlier` to `later`, measured in `later`'s zone.
///
/// Negative when `earlier` falls on a later local date (e.g. the clock was
/// moved backwards).
pub fn days_between<A, B>(earlier: &DateTime<A>, later: &DateTime<B>) -> i64
where
    A: TimeZone,
    B: TimeZone,
{
    let earlier_date = earlier.with_timezone(&later.timezone()).date_naive();
    (later.date_naive() - earlier_date).num_days()
}

/// The next day's reminder instant: `hour:00` local time on the date after `now`.
///
/// Returns `None` for an hour outside 0..=23. When the wall-clock time does not
/// exist (spring-forward gap) the first valid instant after it is used; when it
/// is ambiguous (fall-back) the earlier one wins.
pub fn next_reminder_at<Tz: TimeZone>(now: &DateTime<Tz>, hour: u32) -> Option<DateTime<Tz>> {
    let tomorrow = now.date_naive().succ_opt()?;
    let naive = tomorrow.and_hms_opt(hour, 0, 0)?;
    resolve_local(&now.timezone(), naive)
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => {
            // DST gaps are at most a couple of hours; step forward until valid.
            (1..=4).find_map(|step| {
                match tz.from_local_datetime(&(naive + Duration::minutes(30 * step))) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt),
                    LocalResult::None => None,
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};

    fn zone(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn test_late_night_to_early_morning_is_one_day() {
        let tz = zone(-5);
        let selected = tz.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 2, 0, 1, 0).unwrap();
        assert_eq!(days_between(&selected, &now), 1);
    }

    #[test]
    fn test_same_day_bounds_are_zero() {
        let tz = zone(9);
        let selected = tz.with_ymd_and_hms(2024, 5, 1, 0, 1, 0).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).unwrap();
        assert_eq!(days_between(&selected, &now), 0);
    }

    #[test]
    fn test_uses_local_date_not_utc_date() {
        // 02:00 and 23:30 at UTC+3 fall on different UTC dates but the same local one.
        let tz = zone(3);
        let selected = tz
            .with_ymd_and_hms(2024, 5, 1, 2, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let now = tz.with_ymd_and_hms(2024, 5, 1, 23, 30, 0).unwrap();
        assert_eq!(days_between(&selected, &now), 0);
    }

    #[test]
    fn test_yesterday_morning_to_just_after_midnight() {
        let tz = zone(1);
        let selected = tz.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 2, 0, 5, 0).unwrap();
        assert_eq!(days_between(&selected, &now), 1);
    }

    #[test]
    fn test_clock_moved_back_is_negative() {
        let tz = zone(0);
        let selected = tz.with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(days_between(&selected, &now), -2);
    }

    #[test]
    fn test_next_reminder_is_tomorrow_at_hour() {
        let tz = zone(2);
        let now = tz.with_ymd_and_hms(2024, 12, 31, 21, 45, 12).unwrap();
        let reminder = next_reminder_at(&now, 8).unwrap();
        assert_eq!(reminder, tz.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap());
        assert_eq!(reminder.minute(), 0);
    }

    #[test]
    fn test_next_reminder_rejects_invalid_hour() {
        let now = Utc::now();
        assert!(next_reminder_at(&now, 24).is_none());
    }
}
