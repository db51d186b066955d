//! Weekly study plan model

use super::resource::RecommendedResource;
use super::schedule::percent;
use super::{ConfigError, DailySchedule, StudyPlanConfig, StudySession, Weekday};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural problems found when checking a plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The embedded configuration is not valid
    #[error("invalid plan configuration: {0}")]
    Config(#[from] ConfigError),

    /// The schedule does not have one entry per weekday
    #[error("schedule must have 7 days, found {0}")]
    ScheduleLength(usize),

    /// A day is out of Monday..Sunday order
    #[error("expected {expected} at position {position}, found {found}")]
    DayOrder {
        /// Zero-based schedule position
        position: usize,
        /// Day that belongs at the position
        expected: Weekday,
        /// Day actually stored there
        found: Weekday,
    },

    /// A session is longer than its skill allows
    #[error("session '{id}' lasts {duration} minutes, above its cap")]
    DurationOverCap {
        /// Session id
        id: String,
        /// Stored duration
        duration: u32,
    },

    /// A session practices a skill the plan does not focus on
    #[error("session '{0}' is not part of the plan's focus areas")]
    UnexpectedSkill(String),

    /// A session id does not match its day and skill, or repeats
    #[error("session id '{0}' does not match its day and skill")]
    SessionId(String),

    /// A day's stored total differs from the sum of its sessions
    #[error("{day} total is {stored} minutes but its sessions add up to {actual}")]
    TotalMismatch {
        /// Offending day
        day: Weekday,
        /// Stored total
        stored: u32,
        /// Sum of session durations
        actual: u32,
    },

    /// No session with this id exists on the given day
    #[error("no session '{id}' on {day}")]
    SessionNotFound {
        /// Day searched
        day: Weekday,
        /// Requested session id
        id: String,
    },
}

/// A generated week of study sessions.
///
/// Created only by the schedule generator and replaced wholesale when a new
/// plan is created; session completion flags are the only mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStudyPlan {
    /// Configuration the plan was generated from
    pub config: StudyPlanConfig,
    /// Seven days, Monday first
    pub schedule: Vec<DailySchedule>,
    /// Reference book for the configured level
    pub recommended_resource: RecommendedResource,
    /// Generation timestamp
    pub created_at: DateTime<Utc>,
}

impl WeeklyStudyPlan {
    /// Schedule entry for `day`
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&DailySchedule> {
        self.schedule.iter().find(|d| d.day == day)
    }

    /// Find a session by day and id
    #[must_use]
    pub fn session(&self, day: Weekday, session_id: &str) -> Option<&StudySession> {
        self.day(day).and_then(|d| d.session(session_id))
    }

    /// Mark one session done.
    ///
    /// Returns `true` when the flag changed, `false` when it was already set.
    ///
    /// # Errors
    /// Returns [`PlanError::SessionNotFound`] if the day has no such session.
    pub fn mark_session_completed(
        &mut self,
        day: Weekday,
        session_id: &str,
    ) -> Result<bool, PlanError> {
        self.schedule
            .iter_mut()
            .find(|d| d.day == day)
            .and_then(|d| d.session_mut(session_id))
            .map(StudySession::mark_completed)
            .ok_or_else(|| PlanError::SessionNotFound {
                day,
                id: session_id.to_string(),
            })
    }

    /// All sessions across the week
    pub fn sessions(&self) -> impl Iterator<Item = &StudySession> {
        self.schedule.iter().flat_map(|d| d.sessions.iter())
    }

    /// Total planned minutes for the week
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.schedule.iter().map(|d| d.total_minutes).sum()
    }

    /// Number of days whose sessions are all done
    #[must_use]
    pub fn completed_days(&self) -> usize {
        self.schedule.iter().filter(|d| d.is_completed()).count()
    }

    /// Percentage of the week's sessions completed (0-100)
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        let total = self.sessions().count();
        let done = self.sessions().filter(|s| s.completed).count();
        percent(done, total)
    }

    /// Check the structural invariants of a plan read from outside.
    ///
    /// # Errors
    /// Returns the first [`PlanError`] found.
    pub fn validate(&self) -> Result<(), PlanError> {
        self.config.validate()?;

        if self.schedule.len() != Weekday::ALL.len() {
            return Err(PlanError::ScheduleLength(self.schedule.len()));
        }

        for (position, (entry, expected)) in self.schedule.iter().zip(Weekday::ALL).enumerate() {
            if entry.day != expected {
                return Err(PlanError::DayOrder {
                    position,
                    expected,
                    found: entry.day,
                });
            }

            let mut seen = Vec::with_capacity(entry.sessions.len());
            for session in &entry.sessions {
                if !self.config.focuses_on(session.skill) {
                    return Err(PlanError::UnexpectedSkill(session.id.clone()));
                }
                if session.id != StudySession::id_for(entry.day, session.skill)
                    || seen.contains(&session.skill)
                {
                    return Err(PlanError::SessionId(session.id.clone()));
                }
                if !session.within_cap() {
                    return Err(PlanError::DurationOverCap {
                        id: session.id.clone(),
                        duration: session.duration,
                    });
                }
                seen.push(session.skill);
            }

            let actual: u32 = entry.sessions.iter().map(|s| s.duration).sum();
            if actual != entry.total_minutes {
                return Err(PlanError::TotalMismatch {
                    day: entry.day,
                    stored: entry.total_minutes,
                    actual,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ProficiencyLevel, ReferenceBook, Skill};
    use chrono::TimeZone;

    fn two_session_plan() -> WeeklyStudyPlan {
        let config = StudyPlanConfig::default();
        let schedule = Weekday::ALL
            .into_iter()
            .map(|day| {
                DailySchedule::new(
                    day,
                    vec![
                        StudySession::new(
                            day,
                            Skill::Grammar,
                            "Grammar: Future".to_string(),
                            "book".to_string(),
                            30,
                        ),
                        StudySession::new(
                            day,
                            Skill::Vocabulary,
                            "Vocabulary Building".to_string(),
                            "Academic word lists".to_string(),
                            20,
                        ),
                    ],
                )
            })
            .collect();

        WeeklyStudyPlan {
            config,
            schedule,
            recommended_resource: ReferenceBook::for_level(ProficiencyLevel::Intermediate)
                .to_resource(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        let plan = two_session_plan();
        assert_eq!(plan.validate(), Ok(()));
        assert_eq!(plan.total_minutes(), 350);
    }

    #[test]
    fn test_mark_session_completed() {
        let mut plan = two_session_plan();
        assert_eq!(
            plan.mark_session_completed(Weekday::Friday, "friday-grammar"),
            Ok(true)
        );
        assert_eq!(
            plan.mark_session_completed(Weekday::Friday, "friday-grammar"),
            Ok(false)
        );
        assert!(plan.session(Weekday::Friday, "friday-grammar").unwrap().completed);
        assert_eq!(plan.sessions().count(), 14);
        assert_eq!(plan.overall_progress(), 7);
    }

    #[test]
    fn test_mark_unknown_session() {
        let mut plan = two_session_plan();
        let err = plan
            .mark_session_completed(Weekday::Monday, "tuesday-grammar")
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::SessionNotFound {
                day: Weekday::Monday,
                id: "tuesday-grammar".to_string()
            }
        );
    }

    #[test]
    fn test_completed_days() {
        let mut plan = two_session_plan();
        plan.mark_session_completed(Weekday::Monday, "monday-grammar")
            .unwrap();
        assert_eq!(plan.completed_days(), 0);
        plan.mark_session_completed(Weekday::Monday, "monday-vocabulary")
            .unwrap();
        assert_eq!(plan.completed_days(), 1);
    }

    #[test]
    fn test_validate_rejects_short_schedule() {
        let mut plan = two_session_plan();
        plan.schedule.pop();
        assert_eq!(plan.validate(), Err(PlanError::ScheduleLength(6)));
    }

    #[test]
    fn test_validate_rejects_swapped_days() {
        let mut plan = two_session_plan();
        plan.schedule.swap(0, 1);
        assert!(matches!(
            plan.validate(),
            Err(PlanError::DayOrder { position: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_over_cap() {
        let mut plan = two_session_plan();
        plan.schedule[2].sessions[1].duration = 45;
        plan.schedule[2].total_minutes = 75;
        assert!(matches!(
            plan.validate(),
            Err(PlanError::DurationOverCap { duration: 45, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_total_mismatch() {
        let mut plan = two_session_plan();
        plan.schedule[3].total_minutes = 10;
        assert!(matches!(
            plan.validate(),
            Err(PlanError::TotalMismatch { stored: 10, actual: 50, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unfocused_skill() {
        let mut plan = two_session_plan();
        plan.schedule[0].sessions[1].skill = Skill::Listening;
        assert_eq!(
            plan.validate(),
            Err(PlanError::UnexpectedSkill("monday-vocabulary".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_invalid_config() {
        let mut plan = two_session_plan();
        plan.config.hours_per_week = 50;
        assert_eq!(
            plan.validate(),
            Err(PlanError::Config(ConfigError::HoursOutOfRange(50)))
        );
    }
}
