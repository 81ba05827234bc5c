use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_refresh_end_time")]
    pub refresh_end_time_on_resume: bool,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_refresh_end_time() -> bool {
    true
}
fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            tick_interval_ms: default_tick_interval_ms(),
            refresh_end_time_on_resume: default_refresh_end_time(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rplaytime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rplaytime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rplaytime.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rplaytime.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Resolve a user supplied DB name: absolute paths are kept,
    /// relative names land in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_name {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();

        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.tick_interval_ms, 1000);
        assert!(cfg.refresh_end_time_on_resume);
        assert_eq!(cfg.time_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn load_from_missing_file_gives_defaults() {
        let path = env::temp_dir().join("rplaytime_no_such_config.conf");
        fs::remove_file(&path).ok();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.tick_interval_ms, 1000);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let path = env::temp_dir().join("rplaytime_garbage_config.conf");
        fs::write(&path, "tick_interval_ms: [not, a, number]\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::Config(_))
        ));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn yaml_round_trip_keeps_values() {
        let cfg = Config {
            database: "/data/games.sqlite".into(),
            tick_interval_ms: 250,
            refresh_end_time_on_resume: false,
            time_format: "%H:%M".into(),
        };
        let back: Config = serde_yaml::from_str(&cfg.to_yaml().unwrap()).unwrap();

        assert_eq!(back.tick_interval_ms, 250);
        assert!(!back.refresh_end_time_on_resume);
        assert_eq!(back.database, "/data/games.sqlite");
    }
}
