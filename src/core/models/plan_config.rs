//! Study plan configuration model

use super::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest weekly hour budget the plan creator accepts
pub const MIN_HOURS_PER_WEEK: u8 = 3;

/// Highest weekly hour budget the plan creator accepts
pub const MAX_HOURS_PER_WEEK: u8 = 35;

/// Minimum number of focus areas a plan needs
pub const MIN_FOCUS_AREAS: usize = 2;

/// Preparation horizon chosen by the user.
///
/// Stored and displayed with the plan; schedule generation does not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// 1-3 months
    Short,
    /// 3-6 months
    #[default]
    Medium,
    /// 6+ months
    Long,
}

impl Timeframe {
    /// All timeframes in display order
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Human-readable description used by the plan creator
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "1-3 months (Intensive preparation)",
            Self::Medium => "3-6 months (Balanced approach)",
            Self::Long => "6+ months (Gradual improvement)",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        })
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(format!(
                "Unknown timeframe: '{s}' (expected short, medium or long)"
            )),
        }
    }
}

/// Current English proficiency; selects the reference book and grammar topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    /// Beginner to elementary
    Elementary,
    /// Intermediate
    #[default]
    Intermediate,
    /// Advanced
    Advanced,
}

impl ProficiencyLevel {
    /// All levels in display order
    pub const ALL: [Self; 3] = [Self::Elementary, Self::Intermediate, Self::Advanced];

    /// Capitalized name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Elementary => "elementary",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        })
    }
}

impl FromStr for ProficiencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elementary" => Ok(Self::Elementary),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!(
                "Unknown level: '{s}' (expected elementary, intermediate or advanced)"
            )),
        }
    }
}

/// Reasons a [`StudyPlanConfig`] is not usable for plan generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Weekly hours outside the accepted range
    #[error(
        "hours per week must be between {min} and {max}, got {0}",
        min = MIN_HOURS_PER_WEEK,
        max = MAX_HOURS_PER_WEEK
    )]
    HoursOutOfRange(u8),

    /// Too few focus areas selected
    #[error("select at least {min} focus areas (got {0})", min = MIN_FOCUS_AREAS)]
    NotEnoughFocusAreas(usize),
}

/// User choices a weekly plan is generated from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanConfig {
    /// Preparation horizon (informational)
    pub timeframe: Timeframe,
    /// Weekly study budget in whole hours
    pub hours_per_week: u8,
    /// Proficiency level
    pub level: ProficiencyLevel,
    /// Selected skills, kept in allocation order
    pub focus_areas: BTreeSet<Skill>,
}

impl StudyPlanConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the hours are out of range or fewer than
    /// two focus areas are given.
    pub fn new(
        timeframe: Timeframe,
        hours_per_week: u8,
        level: ProficiencyLevel,
        focus_areas: impl IntoIterator<Item = Skill>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            timeframe,
            hours_per_week,
            level,
            focus_areas: focus_areas.into_iter().collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the range and focus-area constraints
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_HOURS_PER_WEEK..=MAX_HOURS_PER_WEEK).contains(&self.hours_per_week) {
            return Err(ConfigError::HoursOutOfRange(self.hours_per_week));
        }
        if self.focus_areas.len() < MIN_FOCUS_AREAS {
            return Err(ConfigError::NotEnoughFocusAreas(self.focus_areas.len()));
        }
        Ok(())
    }

    /// Whether `skill` is one of the selected focus areas
    #[must_use]
    pub fn focuses_on(&self, skill: Skill) -> bool {
        self.focus_areas.contains(&skill)
    }

    /// Daily study budget: weekly minutes spread over 7 days, rounded to nearest
    #[must_use]
    pub fn daily_minutes(&self) -> u32 {
        // n / 7 never lands on .5, so adding 3 before flooring rounds to nearest
        (u32::from(self.hours_per_week) * 60 + 3) / 7
    }

    /// Approximate hours per day, rounded to one decimal
    #[must_use]
    pub fn hours_per_day_hint(&self) -> f32 {
        (f32::from(self.hours_per_week) / 7.0 * 10.0).round() / 10.0
    }
}

impl Default for StudyPlanConfig {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::Medium,
            hours_per_week: 10,
            level: ProficiencyLevel::Intermediate,
            focus_areas: [Skill::Grammar, Skill::Vocabulary].into_iter().collect(),
        }
    }
}
