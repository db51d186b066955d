//! Shared module for common functionality across all targets

pub mod logger;

/// Returns the current version of the `StudyBloom` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
