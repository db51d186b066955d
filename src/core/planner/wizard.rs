//! Three-step plan creator
//!
//! Step 1 picks the timeframe and weekly hours, step 2 the level, step 3 the
//! focus areas. Hours are clamped to the accepted range as they are entered,
//! so no out-of-range value can be produced. Confirming consumes the wizard
//! and yields a valid [`StudyPlanConfig`]; cancelling drops everything.

use crate::core::models::{
    ProficiencyLevel, Skill, StudyPlanConfig, Timeframe, MAX_HOURS_PER_WEEK, MIN_FOCUS_AREAS,
    MIN_HOURS_PER_WEEK,
};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Number of wizard steps
pub const STEP_COUNT: u8 = 3;

/// Wizard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Timeframe and weekly hours
    Schedule,
    /// Proficiency level
    Level,
    /// Focus areas
    FocusAreas,
}

impl WizardStep {
    /// One-based step number
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Schedule => 1,
            Self::Level => 2,
            Self::FocusAreas => 3,
        }
    }

    /// Question shown on the step
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Schedule => "How much time can you dedicate?",
            Self::Level => "What's your current level?",
            Self::FocusAreas => "Focus areas (select at least 2)",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Schedule => Some(Self::Level),
            Self::Level => Some(Self::FocusAreas),
            Self::FocusAreas => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Schedule => None,
            Self::Level => Some(Self::Schedule),
            Self::FocusAreas => Some(Self::Level),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {STEP_COUNT}", self.number())
    }
}

/// Reasons the wizard refuses to move on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Confirmation attempted with too few focus areas
    #[error(
        "Please select at least {min} focus areas ({selected} selected)",
        min = MIN_FOCUS_AREAS
    )]
    NotEnoughFocusAreas {
        /// Focus areas currently selected
        selected: usize,
    },

    /// Confirmation attempted before reaching the last step
    #[error(
        "Finish all {count} steps before creating the plan (currently on step {current})",
        count = STEP_COUNT
    )]
    Incomplete {
        /// Current step number
        current: u8,
    },

    /// `next` called on the last step; use `confirm` instead
    #[error("Already on the last step")]
    AtLastStep,
}

/// In-progress plan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanWizard {
    step: WizardStep,
    timeframe: Timeframe,
    hours_per_week: u8,
    level: ProficiencyLevel,
    focus_areas: BTreeSet<Skill>,
}

impl Default for PlanWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanWizard {
    /// Start on step 1 with the default choices (medium, 10 h, intermediate,
    /// grammar + vocabulary)
    #[must_use]
    pub fn new() -> Self {
        let defaults = StudyPlanConfig::default();
        Self {
            step: WizardStep::Schedule,
            timeframe: defaults.timeframe,
            hours_per_week: defaults.hours_per_week,
            level: defaults.level,
            focus_areas: defaults.focus_areas,
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Selected timeframe
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Selected weekly hours
    #[must_use]
    pub const fn hours_per_week(&self) -> u8 {
        self.hours_per_week
    }

    /// Selected level
    #[must_use]
    pub const fn level(&self) -> ProficiencyLevel {
        self.level
    }

    /// Selected focus areas
    #[must_use]
    pub const fn focus_areas(&self) -> &BTreeSet<Skill> {
        &self.focus_areas
    }

    /// Choose the timeframe
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    /// Set weekly hours, clamped to the accepted range. Returns the stored value.
    pub fn set_hours_per_week(&mut self, hours: u8) -> u8 {
        self.hours_per_week = hours.clamp(MIN_HOURS_PER_WEEK, MAX_HOURS_PER_WEEK);
        self.hours_per_week
    }

    /// Choose the level
    pub fn set_level(&mut self, level: ProficiencyLevel) {
        self.level = level;
    }

    /// Select or deselect a focus area. Returns whether it is now selected.
    pub fn toggle_focus_area(&mut self, skill: Skill) -> bool {
        if self.focus_areas.remove(&skill) {
            false
        } else {
            self.focus_areas.insert(skill);
            true
        }
    }

    /// Replace the focus-area selection
    pub fn set_focus_areas(&mut self, skills: impl IntoIterator<Item = Skill>) {
        self.focus_areas = skills.into_iter().collect();
    }

    /// Hint shown while the focus-area constraint is not met
    #[must_use]
    pub fn focus_warning(&self) -> Option<WizardError> {
        (self.focus_areas.len() < MIN_FOCUS_AREAS).then_some(WizardError::NotEnoughFocusAreas {
            selected: self.focus_areas.len(),
        })
    }

    /// Whether the plan can be created from the current state
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.step == WizardStep::FocusAreas && self.focus_warning().is_none()
    }

    /// Move to the next step.
    ///
    /// # Errors
    /// Returns [`WizardError::AtLastStep`] on step 3.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        self.step = next;
        Ok(next)
    }

    /// Go back one step; stays on step 1. Choices are kept.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Finish the wizard.
    ///
    /// # Errors
    /// Refuses while not on the last step or with fewer than two focus areas;
    /// the wizard is handed back unchanged so the user can fix the selection.
    pub fn confirm(self) -> Result<StudyPlanConfig, (Self, WizardError)> {
        if self.step != WizardStep::FocusAreas {
            let current = self.step.number();
            return Err((self, WizardError::Incomplete { current }));
        }
        if let Some(err) = self.focus_warning() {
            return Err((self, err));
        }
        Ok(StudyPlanConfig {
            timeframe: self.timeframe,
            hours_per_week: self.hours_per_week,
            level: self.level,
            focus_areas: self.focus_areas,
        })
    }

    /// Abandon the wizard; nothing collected is kept
    #[allow(clippy::needless_pass_by_value)]
    pub fn cancel(self) {}
}
