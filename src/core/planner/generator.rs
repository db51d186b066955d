//! Weekly schedule generator
//!
//! Spreads the weekly hour budget evenly over seven days and fills each day
//! greedily in a fixed skill order:
//! 1. Grammar (needs 15 min left, capped at 30), titled with a rotating topic
//! 2. Vocabulary (needs 10, capped at 20)
//! 3. Reading (needs 15, capped at 25)
//! 4. Listening (needs 10, capped at 20)
//!
//! A skill appears at most once per day. The grammar topic for day `i` is
//! `topics[i % 4]` from the level's reference book, so output depends only
//! on the configuration.

use crate::core::models::{
    DailySchedule, ReferenceBook, Skill, StudyPlanConfig, StudySession, WeeklyStudyPlan, Weekday,
};
use bloom_logger::debug;
use chrono::{DateTime, Utc};

/// Generate a full weekly plan stamped with `created_at`.
///
/// Pure: the same `config` and `created_at` always give the same plan. The
/// configuration is assumed valid (the plan creator enforces it).
#[must_use]
pub fn generate(config: &StudyPlanConfig, created_at: DateTime<Utc>) -> WeeklyStudyPlan {
    let book = ReferenceBook::for_level(config.level);
    WeeklyStudyPlan {
        config: config.clone(),
        schedule: build_schedule(config),
        recommended_resource: book.to_resource(),
        created_at,
    }
}

/// Build the seven daily schedules for `config`
#[must_use]
pub fn build_schedule(config: &StudyPlanConfig) -> Vec<DailySchedule> {
    let book = ReferenceBook::for_level(config.level);
    let topics = book.weekly_topics();
    let daily_minutes = config.daily_minutes();
    debug!(
        "Building schedule: {} h/week -> {daily_minutes} min/day, level {}",
        config.hours_per_week, config.level
    );

    Weekday::ALL
        .into_iter()
        .map(|day| {
            let topic = topics
                .get(day.index() % topics.len().max(1))
                .copied()
                .unwrap_or_default();
            DailySchedule::new(day, allocate_day(config, book, day, topic, daily_minutes))
        })
        .collect()
}

/// Fill one day's budget in allocation order
fn allocate_day(
    config: &StudyPlanConfig,
    book: &ReferenceBook,
    day: Weekday,
    topic: &str,
    daily_minutes: u32,
) -> Vec<StudySession> {
    let mut remaining = daily_minutes;
    let mut sessions = Vec::with_capacity(Skill::ALL.len());

    for skill in Skill::ALL {
        if !config.focuses_on(skill) || remaining < skill.min_minutes() {
            continue;
        }
        let duration = skill.cap_minutes().min(remaining);
        let source = skill
            .fixed_source()
            .map_or_else(|| book.citation(), str::to_string);
        sessions.push(StudySession::new(
            day,
            skill,
            skill.session_title(topic),
            source,
            duration,
        ));
        // Listening comes last, so whatever it leaves over is simply unused.
        remaining -= duration;
    }

    sessions
}
