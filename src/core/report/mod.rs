//! Plan export
//!
//! Renders a weekly plan as Markdown or HTML through askama templates kept in
//! `src/core/report/templates`. Templates only see the flattened rows built
//! by [`ReportContext`].

pub mod formats;

use crate::core::models::{ReferenceBook, Skill, StudySession, UnitGuide, WeeklyStudyPlan};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Errors from rendering or writing an export
#[derive(Debug, Error)]
pub enum ReportError {
    /// Template rendering failed
    #[error("failed to render report: {0}")]
    Render(#[from] askama::Error),

    /// Output file could not be written
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognised format name
    #[error("unknown report format: '{0}' (expected md or html)")]
    UnknownFormat(String),
}

/// One session as shown in an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    /// Session id (`<day>-<skill>`)
    pub id: String,
    /// Skill label
    pub skill: &'static str,
    /// Skill symbol
    pub symbol: &'static str,
    /// Session title
    pub title: String,
    /// Cited source
    pub source: String,
    /// Minutes
    pub duration: u32,
    /// Done flag
    pub completed: bool,
}

impl From<&StudySession> for SessionRow {
    fn from(session: &StudySession) -> Self {
        Self {
            id: session.id.clone(),
            skill: session.skill.label(),
            symbol: session.skill.symbol(),
            title: session.title.clone(),
            source: session.source.clone(),
            duration: session.duration,
            completed: session.completed,
        }
    }
}

/// One day as shown in an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    /// Weekday name
    pub name: &'static str,
    /// Planned minutes
    pub total_minutes: u32,
    /// Percent complete
    pub progress: u8,
    /// Sessions in allocation order
    pub sessions: Vec<SessionRow>,
}

/// Unit guide as shown in an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRow {
    /// Grammar topic
    pub topic: &'static str,
    /// Unit range
    pub unit: &'static str,
    /// What the units cover
    pub content: &'static str,
    /// How to study them
    pub instructions: &'static str,
    /// Example sentences
    pub examples: Vec<&'static str>,
}

impl From<&UnitGuide> for GuideRow {
    fn from(guide: &UnitGuide) -> Self {
        Self {
            topic: guide.topic,
            unit: guide.unit,
            content: guide.content,
            instructions: guide.instructions,
            examples: guide.examples.to_vec(),
        }
    }
}

/// Flattened view of a plan handed to the templates
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Plan being exported
    pub plan: &'a WeeklyStudyPlan,
    /// Reference book of the plan's level
    pub book: &'static ReferenceBook,
}

impl<'a> ReportContext<'a> {
    /// Build a context for `plan`
    #[must_use]
    pub fn new(plan: &'a WeeklyStudyPlan) -> Self {
        Self {
            plan,
            book: ReferenceBook::for_level(plan.config.level),
        }
    }

    /// Focus areas as a comma separated list
    #[must_use]
    pub fn focus_summary(&self) -> String {
        self.plan
            .config
            .focus_areas
            .iter()
            .map(|skill| skill.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Creation time formatted for display
    #[must_use]
    pub fn created_at(&self) -> String {
        self.plan.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    /// Day rows, Monday first
    #[must_use]
    pub fn days(&self) -> Vec<DayRow> {
        self.plan
            .schedule
            .iter()
            .map(|day| DayRow {
                name: day.day.name(),
                total_minutes: day.total_minutes,
                progress: day.progress(),
                sessions: day.sessions.iter().map(SessionRow::from).collect(),
            })
            .collect()
    }

    /// Unit guides for the grammar topics this week touches, in rotation order
    #[must_use]
    pub fn unit_guides(&self) -> Vec<&'static UnitGuide> {
        if !self.plan.config.focuses_on(Skill::Grammar) {
            return Vec::new();
        }
        self.book
            .weekly_topics()
            .iter()
            .filter_map(|topic| self.book.unit_for(topic))
            .collect()
    }

    /// Unit guide rows for the templates
    #[must_use]
    pub fn guide_rows(&self) -> Vec<GuideRow> {
        self.unit_guides().into_iter().map(GuideRow::from).collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report and write it to `output_path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), ReportError> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }

    /// Render the report to a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails.
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError>;
}

/// Generator for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ProficiencyLevel, StudyPlanConfig, Timeframe, Weekday};
    use crate::core::planner::generate;
    use chrono::{TimeZone, Utc};

    pub(crate) fn sample_plan(focus: &[Skill]) -> WeeklyStudyPlan {
        let config = StudyPlanConfig::new(
            Timeframe::Medium,
            10,
            ProficiencyLevel::Intermediate,
            focus.iter().copied(),
        )
        .unwrap();
        generate(&config, Utc.with_ymd_and_hms(2026, 10, 19, 7, 5, 0).unwrap())
    }

    #[test]
    fn test_context_rows() {
        let mut plan = sample_plan(&[Skill::Grammar, Skill::Vocabulary]);
        plan.mark_session_completed(Weekday::Monday, "monday-grammar")
            .unwrap();
        let ctx = ReportContext::new(&plan);

        assert_eq!(ctx.focus_summary(), "Grammar, Vocabulary");
        assert_eq!(ctx.created_at(), "2026-10-19 07:05 UTC");

        let days = ctx.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].name, "Monday");
        assert_eq!(days[0].progress, 50);
        assert!(days[0].sessions[0].completed);
        assert_eq!(days[0].sessions[1].title, "Vocabulary Building");
    }

    #[test]
    fn test_unit_guides_follow_weekly_topics() {
        let plan = sample_plan(&[Skill::Grammar, Skill::Reading]);
        let ctx = ReportContext::new(&plan);
        let topics: Vec<&str> = ctx.unit_guides().iter().map(|g| g.topic).collect();
        assert_eq!(
            topics,
            ["Present and past", "Present perfect and past", "Future", "Modal verbs"]
        );
    }

    #[test]
    fn test_no_unit_guides_without_grammar() {
        let plan = sample_plan(&[Skill::Reading, Skill::Listening]);
        assert!(ReportContext::new(&plan).unit_guides().is_empty());
    }
}
