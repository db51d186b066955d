//! `StudyBloom` library
//!
//! Weekly study-plan generation, the plan creator, plan persistence,
//! reminders and plan export. The `studybloom` binary is a thin CLI over
//! these modules.

pub mod core;
pub mod shared;

pub use crate::core::config;
pub use bloom_logger::{debug, error, info, verbose, warn};
pub use shared::*;
