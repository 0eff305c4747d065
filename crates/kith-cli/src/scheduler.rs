//! Reminder scheduling for the terminal.
//!
//! A CLI has no notification daemon of its own; the reminder is printed and
//! logged so a cron job or desktop notifier can pick it up.

use chrono::{DateTime, Local, Utc};
use kith_core::notify::{Notification, NotificationScheduler};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogScheduler {
    quiet: bool,
}

impl LogScheduler {
    /// `quiet` keeps stdout free for machine-readable output; the log line is
    /// still emitted.
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

pub fn reminder_line(at: DateTime<Utc>, notification: &Notification) -> String {
    format!(
        "Reminder \"{}\" scheduled for {}",
        notification.title,
        at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    )
}

impl NotificationScheduler for LogScheduler {
    async fn schedule_at(
        &self,
        at: DateTime<Utc>,
        notification: &Notification,
    ) -> kith_core::Result<()> {
        let line = reminder_line(at, notification);
        tracing::info!("{}", line);
        if !self.quiet {
            println!("{line}");
        }
        Ok(())
    }
}
