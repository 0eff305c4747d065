//! Daily contact selection.
//!
//! One pick per local calendar day: the first activation of a day draws a new
//! contact from the address book (minus the exclusion list) and persists it;
//! every later activation that day gets the same contact back.

use chrono::{DateTime, TimeZone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::calendar;
use crate::contacts::ContactSource;
use crate::error::{Error, Result};
use crate::exclusion::ExclusionStore;
use crate::models::{Contact, ContactField, DailyPick};
use crate::storage::{load_json, save_json, KeyValueStore, DAILY_PICK_KEY};

/// Fields requested from the contact source for every draw
pub const CANDIDATE_FIELDS: [ContactField; 2] = [ContactField::PhoneNumbers, ContactField::Emails];

/// Chooses an index into a non-empty candidate pool
pub trait Picker {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform random picker over any `rand` RNG
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    /// Wrap an RNG
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Picker seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Decides whether to reuse today's pick or draw a new one
pub struct DailySelector<'a, S, C, P>
where
    S: KeyValueStore,
    C: ContactSource,
    P: Picker,
{
    store: &'a S,
    source: &'a C,
    picker: P,
}

impl<'a, S, C, P> DailySelector<'a, S, C, P>
where
    S: KeyValueStore,
    C: ContactSource,
    P: Picker,
{
    /// Create a selector over the given collaborators
    pub const fn new(store: &'a S, source: &'a C, picker: P) -> Self {
        Self {
            store,
            source,
            picker,
        }
    }

    /// The persisted pick, if any
    pub async fn current_pick(&self) -> Result<Option<DailyPick>> {
        load_json(self.store, DAILY_PICK_KEY).await
    }

    /// Return today's contact, drawing a new one if the stored pick is from
    /// another local calendar day, has since been excluded, or is missing.
    ///
    /// An unreadable pick record counts as missing.
    pub async fn get_or_refresh_pick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<Contact> {
        match self.current_pick().await {
            Ok(Some(pick)) => {
                let age = calendar::days_between(&pick.selected_at, now);
                if age != 0 {
                    tracing::debug!("Stored pick is {} day(s) old; drawing again", age);
                } else if ExclusionStore::new(self.store)
                    .is_excluded(&pick.contact.id)
                    .await?
                {
                    tracing::debug!("Today's pick {} was excluded; drawing again", pick.contact.id);
                } else {
                    tracing::debug!("Reusing today's pick {}", pick.contact.id);
                    return Ok(pick.contact);
                }
            }
            Ok(None) => {}
            Err(Error::Serialization(error)) => {
                tracing::warn!("Stored pick is unreadable, drawing again: {}", error);
            }
            Err(error) => return Err(error),
        }

        self.refresh_pick(now).await
    }

    /// Draw a new contact unconditionally and persist it as today's pick.
    pub async fn refresh_pick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<Contact> {
        if !self.source.request_access().await?.is_granted() {
            return Err(Error::PermissionDenied);
        }

        let pool = self.source.list_contacts(&CANDIDATE_FIELDS).await?;
        let pool_size = pool.len();
        let excluded = ExclusionStore::new(self.store).list().await?;
        let mut candidates = excluded.filter(pool);

        if candidates.is_empty() {
            tracing::info!(
                "No candidates left ({} contact(s), {} excluded)",
                pool_size,
                excluded.len()
            );
            return Err(Error::NoCandidatesAvailable);
        }

        let index = self.picker.pick(candidates.len());
        if index >= candidates.len() {
            return Err(Error::InvalidInput(format!(
                "picker returned index {index} for {} candidate(s)",
                candidates.len()
            )));
        }
        let contact = candidates.swap_remove(index);

        save_json(self.store, DAILY_PICK_KEY, &DailyPick::new(contact.clone(), now)).await?;
        tracing::info!(
            "Picked {} from {} candidate(s)",
            contact.id,
            candidates.len() + 1
        );
        Ok(contact)
    }
}
