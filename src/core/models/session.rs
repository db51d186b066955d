//! Study session model

use super::{Skill, Weekday};
use serde::{Deserialize, Serialize};

/// A single scheduled study activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    /// Identifier unique within a plan (`<weekday>-<skill>`, e.g. `monday-grammar`)
    pub id: String,
    /// Skill practiced
    pub skill: Skill,
    /// Human-readable label
    pub title: String,
    /// Material to study from
    pub source: String,
    /// Allocated minutes
    pub duration: u32,
    /// Set once the user marks the session done
    #[serde(default)]
    pub completed: bool,
}

impl StudySession {
    /// Create a new, not yet completed session
    #[must_use]
    pub fn new(day: Weekday, skill: Skill, title: String, source: String, duration: u32) -> Self {
        Self {
            id: Self::id_for(day, skill),
            skill,
            title,
            source,
            duration,
            completed: false,
        }
    }

    /// Session id for `skill` on `day`
    #[must_use]
    pub fn id_for(day: Weekday, skill: Skill) -> String {
        format!("{}-{}", day.id(), skill.id())
    }

    /// Mark the session done. Returns `true` if it was not completed before.
    pub fn mark_completed(&mut self) -> bool {
        let changed = !self.completed;
        self.completed = true;
        changed
    }

    /// Whether the duration stays within the skill's per-session cap
    #[must_use]
    pub const fn within_cap(&self) -> bool {
        self.duration <= self.skill.cap_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = StudySession::new(
            Weekday::Wednesday,
            Skill::Reading,
            "Reading Comprehension".to_string(),
            "Academic articles".to_string(),
            25,
        );

        assert_eq!(session.id, "wednesday-reading");
        assert!(!session.completed);
        assert!(session.within_cap());
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let mut session = StudySession::new(
            Weekday::Monday,
            Skill::Vocabulary,
            "Vocabulary Building".to_string(),
            "Academic word lists".to_string(),
            20,
        );

        assert!(session.mark_completed());
        assert!(!session.mark_completed());
        assert!(session.completed);
    }

    #[test]
    fn test_over_cap_detected() {
        let mut session = StudySession::new(
            Weekday::Friday,
            Skill::Listening,
            "Listening Practice".to_string(),
            "Academic lectures".to_string(),
            20,
        );
        session.duration = 21;
        assert!(!session.within_cap());
    }
}
