//! Daily reminder scheduling.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::{Error, Result};
use crate::models::ScheduledReminder;
use crate::storage::{load_json, save_json, KeyValueStore, REMINDER_KEY};

/// Content of a local notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Headline shown by the host
    pub title: String,
    /// Secondary text
    pub body: String,
}

/// Trait for handing a notification to the host scheduler (async)
#[allow(async_fn_in_trait)]
pub trait NotificationScheduler {
    /// Schedule `notification` to fire at `at`
    async fn schedule_at(&self, at: DateTime<Utc>, notification: &Notification) -> Result<()>;
}

/// Scheduler that only records what it was asked to schedule
#[derive(Debug, Default)]
pub struct MemoryScheduler {
    scheduled: Mutex<Vec<(DateTime<Utc>, Notification)>>,
}

impl MemoryScheduler {
    /// Create a scheduler with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything scheduled so far, oldest first
    pub fn scheduled(&self) -> Vec<(DateTime<Utc>, Notification)> {
        self.scheduled
            .lock()
            .map(|scheduled| scheduled.clone())
            .unwrap_or_default()
    }
}

impl NotificationScheduler for MemoryScheduler {
    async fn schedule_at(&self, at: DateTime<Utc>, notification: &Notification) -> Result<()> {
        self.scheduled
            .lock()
            .map_err(|_| Error::Storage("scheduler lock poisoned".to_string()))?
            .push((at, notification.clone()));
        Ok(())
    }
}

/// Schedules the "write a friend" reminder for the next morning, at most once
/// per target instant.
pub struct ReminderPlanner<'a, S, N>
where
    S: KeyValueStore,
    N: NotificationScheduler,
{
    store: &'a S,
    scheduler: &'a N,
    hour: u32,
    notification: &'a Notification,
}

impl<'a, S, N> ReminderPlanner<'a, S, N>
where
    S: KeyValueStore,
    N: NotificationScheduler,
{
    /// Plan reminders at `hour:00` local time, deduplicated through `store`
    pub const fn new(
        store: &'a S,
        scheduler: &'a N,
        hour: u32,
        notification: &'a Notification,
    ) -> Self {
        Self {
            store,
            scheduler,
            hour,
            notification,
        }
    }

    /// Schedule tomorrow's reminder unless the same one is already scheduled.
    ///
    /// Returns the instant that was newly scheduled, or `None` when skipped.
    pub async fn plan<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Option<DateTime<Utc>>> {
        let fire_at = calendar::next_reminder_at(now, self.hour)
            .ok_or_else(|| Error::Config(format!("invalid reminder hour {}", self.hour)))?
            .with_timezone(&Utc);

        let previous: Option<ScheduledReminder> = load_json(self.store, REMINDER_KEY).await?;
        if previous.is_some_and(|reminder| reminder.fire_at == fire_at) {
            tracing::debug!("Reminder for {} already scheduled", fire_at);
            return Ok(None);
        }

        self.scheduler
            .schedule_at(fire_at, self.notification)
            .await?;
        save_json(self.store, REMINDER_KEY, &ScheduledReminder { fire_at }).await?;
        tracing::info!("Scheduled reminder for {}", fire_at);
        Ok(Some(fire_at))
    }
}
