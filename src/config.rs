// config.rs - environment-driven configuration for the literumilo CLI.
//
// Grounded on lingodb's config::env::EnvConfig: environment variables are
// read once into a small struct with a documented `vars` module of their
// names, rather than scattered `env::var` calls through the binary.

use std::env;
use std::path::PathBuf;

/// Environment variable names read by `EnvConfig::from_env`.
pub mod vars {
    pub const DICT_PATH: &str = "LITERUMILO_DICT_PATH";
    pub const LOG_LEVEL: &str = "LITERUMILO_LOG_LEVEL";
}

/// Runtime configuration sourced from the environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Path to a dictionary data file to load instead of the bundled one.
    pub dict_path: Option<PathBuf>,
    /// Log level passed to `tracing_subscriber`'s `EnvFilter` (eg. "info", "debug").
    pub log_level: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            dict_path: None,
            log_level: String::from("warn"),
        }
    }
}

impl EnvConfig {
    /// Build a config from the process environment, falling back to
    /// defaults for anything unset.
    ///
    /// Dictionary path resolution order: `LITERUMILO_DICT_PATH`, then a
    /// `literumilo/vortaro.tsv` file under the user's config directory (if
    /// one exists there), then the bundled dictionary.
    pub fn from_env() -> EnvConfig {
        let mut config = EnvConfig::default();

        if let Ok(path) = env::var(vars::DICT_PATH) {
            config.dict_path = Some(PathBuf::from(path));
        }
        else if let Some(path) = user_dictionary_path() {
            config.dict_path = Some(path);
        }
        if let Ok(level) = env::var(vars::LOG_LEVEL) {
            config.log_level = level;
        }

        config
    }
}

/// A dictionary file under the user's config directory, if one is present.
/// Lets a user override the bundled dictionary (eg. with a fuller lexicon)
/// without setting an environment variable every time.
fn user_dictionary_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("literumilo").join("vortaro.tsv");
    if path.is_file() { Some(path) } else { None }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn default_has_no_dict_path_and_warn_level() {
        let config = EnvConfig::default();
        assert!(config.dict_path.is_none());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn from_env_reads_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(vars::DICT_PATH, "/tmp/custom.tsv");
        env::set_var(vars::LOG_LEVEL, "debug");

        let config = EnvConfig::from_env();
        assert_eq!(config.dict_path, Some(PathBuf::from("/tmp/custom.tsv")));
        assert_eq!(config.log_level, "debug");

        env::remove_var(vars::DICT_PATH);
        env::remove_var(vars::LOG_LEVEL);
    }
}
