//! Data models for `StudyBloom`

pub mod plan;
pub mod plan_config;
pub mod resource;
pub mod schedule;
pub mod session;
pub mod skill;

pub use plan::{PlanError, WeeklyStudyPlan};
pub use plan_config::{
    ConfigError, ProficiencyLevel, StudyPlanConfig, Timeframe, MAX_HOURS_PER_WEEK,
    MIN_FOCUS_AREAS, MIN_HOURS_PER_WEEK,
};
pub use resource::{RecommendedResource, ReferenceBook, UnitGuide};
pub use schedule::{DailySchedule, Weekday};
pub use session::StudySession;
pub use skill::Skill;
