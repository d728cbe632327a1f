// logging.rs - initializes structured logging for the literumilo CLI.
//
// Grounded on lingodb's logging.rs: an EnvFilter built from the resolved
// config's log level (falling back to RUST_LOG), feeding a fmt layer
// registered once at startup. This crate has no query/db-op/perf concepts,
// so the custom tracing macros lingodb exports are not needed here - plain
// tracing::debug!/warn! calls at the dictionary-load, file-I/O, and
// failed-decomposition sites are enough.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::EnvConfig;

/// Install a global tracing subscriber configured from `config.log_level`,
/// with `RUST_LOG` taking precedence if set.
///
/// Safe to call more than once; later calls are no-ops (the CLI calls this
/// exactly once at startup, but tests may call it repeatedly).
pub fn init_logging(config: &EnvConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}


#[cfg(test)]
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_does_not_panic_on_repeated_calls() {
        let config = EnvConfig::default();
        init_logging(&config);
        init_logging(&config);
    }
}
