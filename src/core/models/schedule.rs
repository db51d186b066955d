//! Day-level schedule model

use super::StudySession;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the study week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// The seven days in schedule order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Full English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Lowercase name used in session ids
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Zero-based position in the week
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.id() == lowered || (lowered.len() == 3 && day.id().starts_with(&lowered)))
            .ok_or_else(|| format!("Unknown day: '{s}'"))
    }
}

/// Sessions planned for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    /// Day of the week
    pub day: Weekday,
    /// Sessions in allocation order
    pub sessions: Vec<StudySession>,
    /// Sum of session durations
    pub total_minutes: u32,
}

impl DailySchedule {
    /// Build a day from its sessions, deriving the total
    #[must_use]
    pub fn new(day: Weekday, sessions: Vec<StudySession>) -> Self {
        let total_minutes = sessions.iter().map(|s| s.duration).sum();
        Self {
            day,
            sessions,
            total_minutes,
        }
    }

    /// Find a session by id
    #[must_use]
    pub fn session(&self, session_id: &str) -> Option<&StudySession> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Find a session by id for mutation
    pub fn session_mut(&mut self, session_id: &str) -> Option<&mut StudySession> {
        self.sessions.iter_mut().find(|s| s.id == session_id)
    }

    /// Number of completed sessions
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.completed).count()
    }

    /// Minutes covered by completed sessions
    #[must_use]
    pub fn completed_minutes(&self) -> u32 {
        self.sessions
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.duration)
            .sum()
    }

    /// Percentage of sessions completed (0-100)
    #[must_use]
    pub fn progress(&self) -> u8 {
        percent(self.completed_count(), self.sessions.len())
    }

    /// A day is complete when it has sessions and all of them are done
    #[must_use]
    pub fn is_completed(&self) -> bool {
        !self.sessions.is_empty() && self.sessions.iter().all(|s| s.completed)
    }
}

/// Integer percentage, rounded down; an empty whole counts as 0%
pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    u8::try_from(done.min(total) * 100 / total).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Skill;

    fn session(day: Weekday, skill: Skill, duration: u32) -> StudySession {
        StudySession::new(
            day,
            skill,
            skill.session_title("Future"),
            "source".to_string(),
            duration,
        )
    }

    #[test]
    fn test_weekday_order_and_names() {
        let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
        assert_eq!(Weekday::Sunday.index(), 6);
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("Thu".parse::<Weekday>(), Ok(Weekday::Thursday));
        assert_eq!(" SUNDAY ".parse::<Weekday>(), Ok(Weekday::Sunday));
        assert!("funday".parse::<Weekday>().is_err());
        assert!("t".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }

    #[test]
    fn test_daily_totals_and_progress() {
        let mut day = DailySchedule::new(
            Weekday::Tuesday,
            vec![
                session(Weekday::Tuesday, Skill::Grammar, 30),
                session(Weekday::Tuesday, Skill::Vocabulary, 20),
                session(Weekday::Tuesday, Skill::Reading, 25),
            ],
        );
        assert_eq!(day.total_minutes, 75);
        assert_eq!(day.progress(), 0);
        assert!(!day.is_completed());

        day.session_mut("tuesday-vocabulary").unwrap().mark_completed();
        assert_eq!(day.completed_count(), 1);
        assert_eq!(day.completed_minutes(), 20);
        assert_eq!(day.progress(), 33);

        for s in &mut day.sessions {
            s.mark_completed();
        }
        assert_eq!(day.progress(), 100);
        assert!(day.is_completed());
    }

    #[test]
    fn test_empty_day_is_never_completed() {
        let day = DailySchedule::new(Weekday::Sunday, Vec::new());
        assert_eq!(day.total_minutes, 0);
        assert_eq!(day.progress(), 0);
        assert!(!day.is_completed());
        assert!(day.session("sunday-grammar").is_none());
    }
}
