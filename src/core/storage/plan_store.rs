//! Typed persistence for the current weekly plan

use super::{KeyValueStore, StoreError};
use crate::core::models::{PlanError, WeeklyStudyPlan, Weekday};
use bloom_logger::{debug, warn};
use thiserror::Error;

/// Key the current plan is stored under
pub const PLAN_KEY: &str = "weekly_study_plan";

/// Errors from saving or updating the stored plan
#[derive(Debug, Error)]
pub enum PlanStoreError {
    /// Backend failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Plan could not be encoded as JSON
    #[error("failed to encode plan: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Nothing has been saved yet
    #[error("no study plan saved yet; run `studybloom plan create` first")]
    NoPlan,

    /// Requested change does not fit the stored plan
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Saves and loads the single current plan as one JSON document
#[derive(Debug)]
pub struct PlanStore<S> {
    store: S,
}

impl<S: KeyValueStore> PlanStore<S> {
    /// Wrap a key-value backend
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the backend
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give the backend back
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Overwrite the stored plan with `plan`
    ///
    /// # Errors
    /// Returns an error if the plan cannot be encoded or written.
    pub fn save(&mut self, plan: &WeeklyStudyPlan) -> Result<(), PlanStoreError> {
        let json = serde_json::to_string(plan)?;
        self.store.set(PLAN_KEY, &json)?;
        debug!("Saved plan ({} bytes)", json.len());
        Ok(())
    }

    /// Load the stored plan.
    ///
    /// Returns `Ok(None)` on first run, and also when the stored document is
    /// unreadable or structurally invalid; such a document is left in place
    /// until the next save replaces it.
    ///
    /// # Errors
    /// Returns an error only if the backend itself fails.
    pub fn load(&self) -> Result<Option<WeeklyStudyPlan>, PlanStoreError> {
        let Some(json) = self.store.get(PLAN_KEY)? else {
            return Ok(None);
        };

        let plan: WeeklyStudyPlan = match serde_json::from_str(&json) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Ignoring unreadable stored plan: {e}");
                return Ok(None);
            }
        };

        if let Err(e) = plan.validate() {
            warn!("Ignoring invalid stored plan: {e}");
            return Ok(None);
        }

        Ok(Some(plan))
    }

    /// Mark one session of the stored plan done and persist the whole plan.
    ///
    /// Marking an already completed session succeeds and leaves the plan
    /// unchanged.
    ///
    /// # Errors
    /// Returns [`PlanStoreError::NoPlan`] when nothing is stored and
    /// [`PlanStoreError::Plan`] when the session does not exist.
    pub fn mark_session_completed(
        &mut self,
        day: Weekday,
        session_id: &str,
    ) -> Result<WeeklyStudyPlan, PlanStoreError> {
        let mut plan = self.load()?.ok_or(PlanStoreError::NoPlan)?;
        if plan.mark_session_completed(day, session_id)? {
            self.save(&plan)?;
        } else {
            debug!("Session {session_id} on {day} already completed");
        }
        Ok(plan)
    }

    /// Remove the stored plan
    ///
    /// # Errors
    /// Returns an error if the backend cannot be written.
    pub fn clear(&mut self) -> Result<(), PlanStoreError> {
        self.store.remove(PLAN_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ProficiencyLevel, Skill, StudyPlanConfig, Timeframe};
    use crate::core::planner::generate;
    use crate::core::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    /// Backend that can be switched to reject every write
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        read_only: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.read_only {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only store",
                )));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }

        fn keys(&self) -> Result<Vec<String>, StoreError> {
            self.inner.keys()
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            self.inner.clear()
        }
    }

    fn sample_plan() -> WeeklyStudyPlan {
        let config = StudyPlanConfig::new(
            Timeframe::Medium,
            10,
            ProficiencyLevel::Intermediate,
            [Skill::Grammar, Skill::Reading],
        )
        .unwrap();
        generate(&config, Utc.with_ymd_and_hms(2026, 10, 19, 7, 0, 0).unwrap())
    }

    #[test]
    fn test_first_run_has_no_plan() {
        let store = PlanStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = PlanStore::new(MemoryStore::new());
        let plan = sample_plan();
        store.save(&plan).unwrap();
        assert_eq!(store.load().unwrap(), Some(plan));
    }

    #[test]
    fn test_save_overwrites_previous_plan() {
        let mut store = PlanStore::new(MemoryStore::new());
        store.save(&sample_plan()).unwrap();

        let config = StudyPlanConfig::default();
        let newer = generate(&config, Utc.with_ymd_and_hms(2026, 10, 20, 7, 0, 0).unwrap());
        store.save(&newer).unwrap();
        assert_eq!(store.load().unwrap(), Some(newer));
        assert_eq!(store.store().keys().unwrap(), [PLAN_KEY]);
    }

    #[test]
    fn test_malformed_document_is_ignored() {
        let mut backend = MemoryStore::new();
        backend.set(PLAN_KEY, "{\"schedule\": 12").unwrap();
        let store = PlanStore::new(backend);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_structurally_invalid_plan_is_ignored() {
        let mut plan = sample_plan();
        plan.schedule.truncate(3);
        let mut backend = MemoryStore::new();
        backend
            .set(PLAN_KEY, &serde_json::to_string(&plan).unwrap())
            .unwrap();
        assert!(PlanStore::new(backend).load().unwrap().is_none());
    }

    #[test]
    fn test_mark_completed_persists_and_is_idempotent() {
        let mut store = PlanStore::new(MemoryStore::new());
        store.save(&sample_plan()).unwrap();

        let once = store
            .mark_session_completed(Weekday::Wednesday, "wednesday-reading")
            .unwrap();
        let twice = store
            .mark_session_completed(Weekday::Wednesday, "wednesday-reading")
            .unwrap();
        assert_eq!(once, twice);

        let loaded = store.load().unwrap().unwrap();
        assert!(
            loaded
                .session(Weekday::Wednesday, "wednesday-reading")
                .unwrap()
                .completed
        );
        assert_eq!(loaded.sessions().filter(|s| s.completed).count(), 1);
    }

    #[test]
    fn test_mark_without_plan() {
        let mut store = PlanStore::new(MemoryStore::new());
        assert!(matches!(
            store.mark_session_completed(Weekday::Monday, "monday-grammar"),
            Err(PlanStoreError::NoPlan)
        ));
    }

    #[test]
    fn test_mark_unknown_session() {
        let mut store = PlanStore::new(MemoryStore::new());
        store.save(&sample_plan()).unwrap();
        assert!(matches!(
            store.mark_session_completed(Weekday::Monday, "monday-listening"),
            Err(PlanStoreError::Plan(PlanError::SessionNotFound { .. }))
        ));
    }

    #[test]
    fn test_failed_save_reports_store_error_and_keeps_plan_usable() {
        let mut store = PlanStore::new(FlakyStore {
            read_only: true,
            ..FlakyStore::default()
        });
        let mut plan = sample_plan();

        assert!(matches!(
            store.save(&plan),
            Err(PlanStoreError::Store(StoreError::Io(_)))
        ));
        assert!(store.load().unwrap().is_none());

        assert!(plan
            .mark_session_completed(Weekday::Monday, "monday-grammar")
            .unwrap());
        assert_eq!(plan.sessions().filter(|s| s.completed).count(), 1);
    }

    #[test]
    fn test_failed_completion_save_leaves_stored_plan_unchanged() {
        let mut store = PlanStore::new(FlakyStore::default());
        let plan = sample_plan();
        store.save(&plan).unwrap();

        let mut backend = store.into_inner();
        backend.read_only = true;
        let mut store = PlanStore::new(backend);

        assert!(matches!(
            store.mark_session_completed(Weekday::Friday, "friday-reading"),
            Err(PlanStoreError::Store(_))
        ));
        assert_eq!(store.load().unwrap(), Some(plan));
    }

    #[test]
    fn test_clear() {
        let mut store = PlanStore::new(MemoryStore::new());
        store.save(&sample_plan()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
