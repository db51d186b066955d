//! Integration tests for logger behavior.

use study_bloom::shared::logger::{current_level, set_level, set_level_from_str, Level};
use study_bloom::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_round_trips_through_config_strings() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        assert_eq!(level.to_string().parse::<Level>(), Ok(level));
    }
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    assert!(current_level() >= Level::Error);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}
