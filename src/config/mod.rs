use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Static profile block shown by `timeclock profile`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Location permission for clock events.
    #[serde(default)]
    pub location_enabled: bool,
    /// Command printing `lat,lon[,accuracy]`, used when location is enabled.
    #[serde(default)]
    pub location_command: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            location_enabled: false,
            location_command: None,
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Resolve the database path for `init`: absolute paths are kept,
    /// relative names land in the config directory.
    pub fn resolve_database(custom_name: Option<&str>) -> PathBuf {
        match custom_name {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Create the config directory and, unless in test mode, write the
    /// configuration file. Returns the configured database path.
    pub fn init_all(&self, custom_name: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = Self::resolve_database(custom_name);

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..self.clone()
            };
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        Ok(db_path)
    }
}
