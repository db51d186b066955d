//! Markdown plan export
//!
//! One table per day plus the unit guides for the week's grammar topics.
//! Renders well in GitHub, GitLab, and VS Code.

use crate::core::report::{DayRow, GuideRow, ReportContext, ReportError, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "plan.md", escape = "none")]
struct MarkdownPlan<'a> {
    level: &'a str,
    timeframe: &'a str,
    hours_per_week: u8,
    daily_minutes: u32,
    focus: String,
    created_at: String,
    book_title: &'a str,
    book_author: &'a str,
    book_description: &'a str,
    total_minutes: u32,
    progress: u8,
    days: Vec<DayRow>,
    guides: Vec<GuideRow>,
}

/// Markdown report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        let config = &ctx.plan.config;
        let page = MarkdownPlan {
            level: config.level.label(),
            timeframe: config.timeframe.label(),
            hours_per_week: config.hours_per_week,
            daily_minutes: config.daily_minutes(),
            focus: ctx.focus_summary(),
            created_at: ctx.created_at(),
            book_title: &ctx.plan.recommended_resource.title,
            book_author: &ctx.plan.recommended_resource.author,
            book_description: &ctx.plan.recommended_resource.description,
            total_minutes: ctx.plan.total_minutes(),
            progress: ctx.plan.overall_progress(),
            days: ctx.days(),
            guides: ctx.guide_rows(),
        };
        Ok(page.render()?)
    }
}
