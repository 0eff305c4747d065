//! Daily pick and reminder records

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::Contact;

/// The contact chosen for a calendar day.
///
/// Stored as a single record; a new pick overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPick {
    /// The chosen contact
    pub contact: Contact,
    /// When the pick was made
    #[serde(rename = "timestamp")]
    pub selected_at: DateTime<Utc>,
}

impl DailyPick {
    /// Create a pick made at `selected_at`
    pub fn new<Tz: TimeZone>(contact: Contact, selected_at: &DateTime<Tz>) -> Self {
        Self {
            contact,
            selected_at: selected_at.with_timezone(&Utc),
        }
    }
}

/// Bookkeeping for the most recently scheduled reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReminder {
    /// Instant the reminder fires
    pub fire_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_daily_pick_wire_format() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
        let pick = DailyPick::new(Contact::new("1", "Ada"), &at);

        let json = serde_json::to_value(&pick).unwrap();
        assert_eq!(json["timestamp"], "2024-03-10T07:30:00Z");
        assert_eq!(json["contact"]["name"], "Ada");
    }

    #[test]
    fn test_daily_pick_reads_offset_timestamp() {
        let raw = r#"{"contact":{"id":"1","name":"Ada"},"timestamp":"2024-03-10T07:30:00.000Z"}"#;
        let pick: DailyPick = serde_json::from_str(raw).unwrap();
        assert_eq!(
            pick.selected_at,
            Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap()
        );
    }
}
