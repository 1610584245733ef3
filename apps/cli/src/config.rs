//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--database`, `--out`)
//! 2. Environment variables (`BIZLEDGER_*`, `RUST_LOG`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use bizledger_core::DEFAULT_DATABASE_FILE;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,bizledger=debug,sqlx=warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Directory CSV exports are written into
    pub export_dir: PathBuf,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Database: `./secure_business_manager.db`
    /// - Exports: current directory
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            export_dir: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BIZLEDGER_DATABASE`: Override database path
    /// - `BIZLEDGER_EXPORT_DIR`: Override CSV output directory
    /// - `RUST_LOG`: Override log filter
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("BIZLEDGER_DATABASE").filter(|v| !v.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("BIZLEDGER_EXPORT_DIR").filter(|v| !v.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Applies a command line database override.
    pub fn with_database(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }

    /// Applies a command line export directory override.
    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.export_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_path, PathBuf::from("secure_business_manager.db"));
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = [
            ("BIZLEDGER_DATABASE", "/data/ledger.db"),
            ("BIZLEDGER_EXPORT_DIR", "/tmp/exports"),
            ("RUST_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.database_path, PathBuf::from("/data/ledger.db"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_blank_environment_is_ignored() {
        let config = AppConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_flags_win_over_environment() {
        let config = AppConfig::from_lookup(|k| {
            (k == "BIZLEDGER_DATABASE").then(|| "/env.db".to_string())
        })
        .with_database(Some(PathBuf::from("/flag.db")))
        .with_export_dir(None);

        assert_eq!(config.database_path, PathBuf::from("/flag.db"));
        assert_eq!(config.export_dir, PathBuf::from("."));
    }
}
