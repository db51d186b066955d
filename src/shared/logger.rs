//! Re-export logger API from the `bloom_logger` crate to
//! provide the `study_bloom::shared::logger` path.

pub use bloom_logger::{
    close_file_logging, current_level, disable_debug, disable_verbose, enable_debug,
    enable_verbose, init_file_logging, is_debug_enabled, is_verbose_enabled, set_level,
    set_level_from_str, Level,
};
