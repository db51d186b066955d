//! Core module for common functionality across all targets

pub mod config;
pub mod models;
pub mod planner;
pub mod reminders;
pub mod report;
pub mod storage;
