//! CLI command handlers for `StudyBloom`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod plan;
pub mod remind;

use bloom_logger::verbose;
use std::io::{self, Write};
use study_bloom::config::{Config, StorageBackend};
use study_bloom::core::storage::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Open the key-value backend selected by the configuration
pub fn open_store(config: &Config) -> Result<Box<dyn KeyValueStore>, StoreError> {
    match config.storage.backend {
        StorageBackend::File => {
            let dir = config.store_dir();
            verbose!("Using file store at {}", dir.display());
            Ok(Box::new(FileStore::open(dir)?))
        }
        StorageBackend::Memory => {
            verbose!("Using in-memory store; nothing will be kept after this run");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` means no
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
