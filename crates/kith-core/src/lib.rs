//! kith-core - Core library for Kith
//!
//! Kith shows one contact per day and lets the user reach out or exclude that
//! person forever. This crate holds the models, the daily selector and
//! exclusion store, collaborator traits, storage backends, and the application
//! state machine used by every front end.

pub mod actions;
pub mod app;
pub mod calendar;
pub mod config;
pub mod contacts;
pub mod db;
pub mod error;
pub mod exclusion;
pub mod models;
pub mod notify;
pub mod selector;
pub mod storage;
pub mod util;

pub use app::{App, AppEvent, AppState, Effect, View};
pub use error::{Error, Result};
pub use models::{Contact, ContactId, DailyPick, ExclusionSet};
