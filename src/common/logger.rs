use std::sync::Once;

use env_logger::{Builder, Target};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the process-wide logger. Only the first call has any effect.
///
/// `level` applies to this crate; `RUST_LOG` still overrides everything.
pub fn initialize_logger_with_level(level: LevelFilter) {
    // Use call_once_force to recover if an earlier initialization attempt panicked.
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("dbms", level)
            .filter_module("dbms::container", level)
            .filter_module("rustyline", LevelFilter::Warn)
            .target(Target::Stderr)
            .format_timestamp_millis()
            .parse_default_env();

        // Avoid panicking if the logger was already initialized elsewhere.
        let _ = builder.try_init();
    });
}

pub fn initialize_logger() {
    initialize_logger_with_level(LevelFilter::Info);
}

/// Parses a textual level such as `"debug"`, falling back to `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}
