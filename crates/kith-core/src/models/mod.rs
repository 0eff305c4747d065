//! Data models for Kith

mod contact;
mod daily_pick;
mod exclusion;

pub use contact::{Contact, ContactField, ContactId, PhoneNumber};
pub use daily_pick::{DailyPick, ScheduledReminder};
pub use exclusion::ExclusionSet;
