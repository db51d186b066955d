//! HTML plan export
//!
//! Produces a single self-contained page with inline styles; completed
//! sessions are struck through.

use crate::core::report::{DayRow, GuideRow, ReportContext, ReportError, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "plan.html")]
struct HtmlPlan<'a> {
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

/// HTML report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        let config = &ctx.plan.config;
        let resource = &ctx.plan.recommended_resource;
        let page = HtmlPlan {
            level: config.level.label(),
            timeframe: config.timeframe.label(),
            hours_per_week: config.hours_per_week,
            daily_minutes: config.daily_minutes(),
            focus: ctx.focus_summary(),
            created_at: ctx.created_at(),
            book_title: &resource.title,
            book_author: &resource.author,
            book_description: &resource.description,
            total_minutes: ctx.plan.total_minutes(),
            progress: ctx.plan.overall_progress(),
            days: ctx.days(),
            guides: ctx.guide_rows(),
        };
        Ok(page.render()?)
    }
}
