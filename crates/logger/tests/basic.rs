//! Integration tests for the `bloom_logger` crate

use bloom_logger::{current_level, debug, error, info, warn};
use bloom_logger::{set_level, set_level_from_str, Level};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert_eq!(current_level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("generated plan with {} sessions", 14);
    warn!("store unavailable, keeping plan in memory");
    error!("failed to save plan: {}", "disk full");
    debug!("daily budget {} minutes", 26);
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_respects_runtime_flag() {
    use bloom_logger::{disable_debug, enable_debug, is_debug_enabled};
    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("should be silent");
    enable_debug();
    assert!(is_debug_enabled());
    debug!("should emit");
}
