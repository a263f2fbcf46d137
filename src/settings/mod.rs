pub mod io;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::database::DbConfig;

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "STOCKROOM_DB";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    pub database_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives, e.g. `"stockroom=debug"`.
    pub log_filter: Option<String>,
}

impl AppSettings {
    /// Database location by precedence: explicit path, `STOCKROOM_DB`, the
    /// settings file, then the default under the user's documents.
    pub fn resolve_db_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        let from_env = std::env::var_os(DB_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        resolve_db_path(explicit, from_env, self.database_path.clone())
    }
}

fn resolve_db_path(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    from_settings: Option<PathBuf>,
) -> PathBuf {
    explicit
        .or(from_env)
        .or(from_settings)
        .unwrap_or_else(DbConfig::default_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_precedence() {
        let cli = Some(PathBuf::from("cli.db"));
        let env = Some(PathBuf::from("env.db"));
        let file = Some(PathBuf::from("file.db"));

        assert_eq!(resolve_db_path(cli.clone(), env.clone(), file.clone()), PathBuf::from("cli.db"));
        assert_eq!(resolve_db_path(None, env, file.clone()), PathBuf::from("env.db"));
        assert_eq!(resolve_db_path(None, None, file), PathBuf::from("file.db"));
        assert!(resolve_db_path(None, None, None).ends_with(DbConfig::DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_settings_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("app_settings.json");

        let missing: AppSettings = io::load_settings_from(&path).unwrap();
        assert_eq!(missing, AppSettings::default());

        let settings = AppSettings {
            database_path: Some(PathBuf::from("/data/stock.db")),
            log_filter: Some("stockroom=debug".to_string()),
        };
        io::save_settings_to(&settings, &path).unwrap();
        let loaded: AppSettings = io::load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_settings.json");
        std::fs::write(&path, r#"{"log_filter": "warn"}"#).unwrap();

        let loaded: AppSettings = io::load_settings_from(&path).unwrap();
        assert_eq!(loaded.database_path, None);
        assert_eq!(loaded.log_filter.as_deref(), Some("warn"));
    }

    #[test]
    fn test_malformed_settings_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = io::load_settings_from::<AppSettings>(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
