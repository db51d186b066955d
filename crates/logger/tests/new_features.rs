//! Tests for verbose and file-logging features.

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    use bloom_logger::{disable_verbose, enable_verbose, is_verbose_enabled, verbose};

    disable_verbose();
    verbose!("This should not appear");
    assert!(!is_verbose_enabled());

    enable_verbose();
    verbose!("This should appear: verbose test {}", 42);
    assert!(is_verbose_enabled());
}

#[cfg(all(feature = "file-logging", feature = "log-info"))]
#[test]
fn file_logging_captures_tagged_lines_only() {
    use bloom_logger::{
        close_file_logging, enable_verbose, error, info, init_file_logging, set_level, verbose,
        warn, Level,
    };
    use std::fs;

    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("logs").join("bloom.log");

    set_level(Level::Debug);
    assert!(init_file_logging(&log_path));

    info!("Test info message");
    warn!("Test warning message");
    error!("Test error message");

    enable_verbose();
    verbose!("This verbose message should NOT be in the file");

    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[INFO] Test info message"));
    assert!(contents.contains("[WARN] Test warning message"));
    assert!(contents.contains("[ERROR] Test error message"));
    assert!(!contents.contains("verbose message"));
}
