//! Application state machine.
//!
//! [`App`] owns the collaborators and an explicit [`AppState`]. Front ends feed
//! it [`AppEvent`]s one at a time and render [`AppState::view`] afterwards.
//! Each event runs a fixed sequence of awaited steps (load, decide, mutate,
//! persist); domain failures become views instead of escaping to the caller.

use chrono::{DateTime, TimeZone, Utc};

use crate::actions::{ContactAction, UrlOpener};
use crate::config::KithConfig;
use crate::contacts::ContactSource;
use crate::error::{Error, Result};
use crate::exclusion::ExclusionStore;
use crate::models::{Contact, ContactId};
use crate::notify::{Notification, NotificationScheduler, ReminderPlanner};
use crate::selector::{DailySelector, Picker};
use crate::storage::KeyValueStore;

/// What the user should currently see
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Nothing has happened yet
    #[default]
    Idle,
    /// Today's contact
    Showing(Contact),
    /// Contact access was refused
    PermissionDenied,
    /// Everyone has been excluded, or the address book is empty
    NoOneLeft,
    /// Persistence kept failing
    StorageUnavailable(String),
}

impl View {
    fn from_error(error: &Error) -> Self {
        match error {
            Error::PermissionDenied => Self::PermissionDenied,
            Error::NoCandidatesAvailable => Self::NoOneLeft,
            other => Self::StorageUnavailable(other.to_string()),
        }
    }

    fn from_result(result: Result<Contact>) -> Self {
        match result {
            Ok(contact) => Self::Showing(contact),
            Err(error) => Self::from_error(&error),
        }
    }

    /// The shown contact, if any
    pub const fn contact(&self) -> Option<&Contact> {
        match self {
            Self::Showing(contact) => Some(contact),
            _ => None,
        }
    }
}

/// Explicit application state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// What the front end should render
    pub view: View,
}

/// Inputs to the state machine
#[derive(Debug, Clone)]
pub enum AppEvent<Tz: TimeZone> {
    /// The app came to the foreground
    Activate { now: DateTime<Tz> },
    /// Exclude the shown contact forever and pick someone else
    ExcludeCurrent { now: DateTime<Tz> },
    /// Reach out to the shown contact
    Reach(ContactAction),
}

/// Side effects performed while handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A reminder was handed to the scheduler
    ReminderScheduled(DateTime<Utc>),
    /// A contact was excluded
    Excluded(ContactId),
    /// A URI was handed to the OS
    Opened(String),
}

/// The application: collaborators plus state
pub struct App<S, C, N, O, P>
where
    S: KeyValueStore,
    C: ContactSource,
    N: NotificationScheduler,
    O: UrlOpener,
    P: Picker,
{
    store: S,
    source: C,
    scheduler: N,
    opener: O,
    picker: P,
    reminder_hour: u32,
    notification: Notification,
    storage_retries: u32,
    state: AppState,
}

impl<S, C, N, O, P> App<S, C, N, O, P>
where
    S: KeyValueStore,
    C: ContactSource,
    N: NotificationScheduler,
    O: UrlOpener,
    P: Picker,
{
    /// Build an app; fails on an invalid configuration
    pub fn new(
        store: S,
        source: C,
        scheduler: N,
        opener: O,
        picker: P,
        config: &KithConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            source,
            scheduler,
            opener,
            picker,
            reminder_hour: config.reminder_hour,
            notification: config.notification(),
            storage_retries: config.storage_retries,
            state: AppState::default(),
        })
    }

    /// Current state
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Current view
    pub const fn view(&self) -> &View {
        &self.state.view
    }

    /// Handle one event to completion.
    ///
    /// Only reach failures are returned as errors; selection and storage
    /// failures are reflected in the view.
    pub async fn handle<Tz: TimeZone>(&mut self, event: AppEvent<Tz>) -> Result<Vec<Effect>> {
        match event {
            AppEvent::Activate { now } => Ok(self.activate(&now).await),
            AppEvent::ExcludeCurrent { now } => Ok(self.exclude_current(&now).await),
            AppEvent::Reach(action) => self.reach(action).map(|uri| vec![Effect::Opened(uri)]),
        }
    }

    async fn activate<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Vec<Effect> {
        let result = self.draw(now, false).await;
        self.state.view = View::from_result(result);

        let planner = ReminderPlanner::new(
            &self.store,
            &self.scheduler,
            self.reminder_hour,
            &self.notification,
        );
        match planner.plan(now).await {
            Ok(Some(fire_at)) => vec![Effect::ReminderScheduled(fire_at)],
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!("Failed to schedule reminder: {}", error);
                Vec::new()
            }
        }
    }

    async fn exclude_current<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Vec<Effect> {
        let Some(id) = self.state.view.contact().map(|contact| contact.id.clone()) else {
            tracing::debug!("Exclude ignored: no contact is shown");
            return Vec::new();
        };

        let mut attempt = 0;
        let excluded = loop {
            match ExclusionStore::new(&self.store).exclude(&id).await {
                Err(error) if error.is_storage_failure() && attempt < self.storage_retries => {
                    attempt += 1;
                    tracing::warn!("Exclusion write failed (attempt {}): {}", attempt, error);
                }
                other => break other,
            }
        };
        if let Err(error) = excluded {
            self.state.view = View::from_error(&error);
            return Vec::new();
        }

        let result = self.draw(now, true).await;
        self.state.view = View::from_result(result);
        vec![Effect::Excluded(id)]
    }

    fn reach(&self, action: ContactAction) -> Result<String> {
        let contact = self
            .state
            .view
            .contact()
            .ok_or_else(|| Error::InvalidInput("no contact is shown".to_string()))?;
        let uri = action.uri(contact).ok_or_else(|| {
            Error::InvalidInput(format!("{} cannot be reached by {action}", contact.name))
        })?;
        self.opener.open(&uri)?;
        tracing::info!("Opened {} for {}", action, contact.id);
        Ok(uri)
    }

    async fn draw<Tz: TimeZone>(&mut self, now: &DateTime<Tz>, force: bool) -> Result<Contact> {
        let mut attempt = 0;
        loop {
            let mut selector = DailySelector::new(&self.store, &self.source, &mut self.picker);
            let result = if force {
                selector.refresh_pick(now).await
            } else {
                selector.get_or_refresh_pick(now).await
            };
            match result {
                Err(error) if error.is_storage_failure() && attempt < self.storage_retries => {
                    attempt += 1;
                    tracing::warn!("Selection failed (attempt {}): {}", attempt, error);
                }
                other => return other,
            }
        }
    }
}
