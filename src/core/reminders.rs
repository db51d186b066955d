//! Local study reminders
//!
//! Reminders are queued in the key-value store under [`REMINDERS_KEY`] as one
//! JSON list. Scheduling never touches the stored plan, so a failed reminder
//! leaves plan state as it was.

use crate::core::storage::{KeyValueStore, StoreError};
use bloom_logger::{debug, warn};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key the pending reminders are stored under
pub const REMINDERS_KEY: &str = "scheduled_reminders";

/// Hour of the next day the streak reminder fires at unless configured
pub const DEFAULT_STREAK_HOUR: u32 = 19;

const STUDY_TITLE: &str = "Study Reminder 📚";
const STREAK_TITLE: &str = "Keep Your Streak! 🔥";
const STREAK_BODY: &str =
    "Don't forget to complete your study tasks today to maintain your streak!";

/// Errors from scheduling reminders
#[derive(Debug, Error)]
pub enum ReminderError {
    /// Backend failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Queue could not be encoded as JSON
    #[error("failed to encode reminders: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Requested time is not after the current time
    #[error("reminder time {at} is not in the future")]
    NotInFuture {
        /// Requested trigger time
        at: NaiveDateTime,
    },

    /// Hour outside 0-23
    #[error("invalid reminder hour {0} (expected 0-23)")]
    InvalidHour(u32),
}

/// Reminder contents before it is queued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
    /// Local trigger time
    pub at: NaiveDateTime,
}

impl ReminderRequest {
    /// Reminder to work on a session titled `session_title` at `at`
    #[must_use]
    pub fn study(session_title: &str, at: NaiveDateTime) -> Self {
        Self {
            title: STUDY_TITLE.to_string(),
            body: format!("Time to work on: {session_title}"),
            at,
        }
    }

    /// Streak reminder for the day after `today` at `hour`:00
    ///
    /// # Errors
    /// Returns [`ReminderError::InvalidHour`] if `hour` is not 0-23.
    pub fn streak(today: NaiveDate, hour: u32) -> Result<Self, ReminderError> {
        let tomorrow = today + Duration::days(1);
        let at = tomorrow
            .and_hms_opt(hour, 0, 0)
            .ok_or(ReminderError::InvalidHour(hour))?;
        Ok(Self {
            title: STREAK_TITLE.to_string(),
            body: STREAK_BODY.to_string(),
            at,
        })
    }
}

/// A queued reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Queue-assigned id
    pub id: u64,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
    /// Local trigger time
    pub at: NaiveDateTime,
}

/// Something that can deliver reminders later
pub trait ReminderScheduler {
    /// Queue `request`, given the current local time `now`
    ///
    /// # Errors
    /// Fails when the time is not after `now` or the reminder cannot be kept.
    fn schedule(
        &mut self,
        request: ReminderRequest,
        now: NaiveDateTime,
    ) -> Result<Reminder, ReminderError>;

    /// Reminders that have not fired by `now`, earliest first
    ///
    /// # Errors
    /// Fails when the queue cannot be read.
    fn pending(&self, now: NaiveDateTime) -> Result<Vec<Reminder>, ReminderError>;
}

/// Reminder queue kept in a key-value store
#[derive(Debug)]
pub struct StoreReminderQueue<S> {
    store: S,
}

impl<S: KeyValueStore> StoreReminderQueue<S> {
    /// Wrap a key-value backend
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Give the backend back
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Everything stored, including reminders that already fired
    ///
    /// # Errors
    /// Fails when the backend cannot be read.
    pub fn all(&self) -> Result<Vec<Reminder>, ReminderError> {
        let Some(json) = self.store.get(REMINDERS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&json) {
            Ok(reminders) => Ok(reminders),
            Err(e) => {
                warn!("Ignoring unreadable reminder queue: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Drop every queued reminder
    ///
    /// # Errors
    /// Fails when the backend cannot be written.
    pub fn clear(&mut self) -> Result<(), ReminderError> {
        self.store.remove(REMINDERS_KEY)?;
        Ok(())
    }

    fn write(&mut self, reminders: &[Reminder]) -> Result<(), ReminderError> {
        let json = serde_json::to_string(reminders)?;
        self.store.set(REMINDERS_KEY, &json)?;
        Ok(())
    }
}

impl<S: KeyValueStore> ReminderScheduler for StoreReminderQueue<S> {
    fn schedule(
        &mut self,
        request: ReminderRequest,
        now: NaiveDateTime,
    ) -> Result<Reminder, ReminderError> {
        if request.at <= now {
            return Err(ReminderError::NotInFuture { at: request.at });
        }

        let mut reminders = self.all()?;
        let next_id = reminders
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        let id = next_id.unwrap_or_else(|| {
            warn!("Reminder ids exhausted; discarding the stored queue");
            reminders.clear();
            1
        });
        // fired reminders are dropped whenever the queue is rewritten
        reminders.retain(|r| r.at > now);

        let reminder = Reminder {
            id,
            title: request.title,
            body: request.body,
            at: request.at,
        };
        reminders.push(reminder.clone());
        reminders.sort_by_key(|r| (r.at, r.id));
        self.write(&reminders)?;

        debug!("Scheduled reminder {} for {}", reminder.id, reminder.at);
        Ok(reminder)
    }

    fn pending(&self, now: NaiveDateTime) -> Result<Vec<Reminder>, ReminderError> {
        let mut reminders = self.all()?;
        reminders.retain(|r| r.at > now);
        reminders.sort_by_key(|r| (r.at, r.id));
        Ok(reminders)
    }
}
