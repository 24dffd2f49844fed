use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    /// Identities signed in with this e-mail see every user's timesheet.
    #[serde(default)]
    pub admin_email: Option<String>,
    #[serde(default = "default_shift_start")]
    pub default_shift_start: String,
    #[serde(default = "default_shift_end")]
    pub default_shift_end: String,
}

fn default_shift_start() -> String {
    "15:00".to_string()
}
fn default_shift_end() -> String {
    "23:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            user_id: None,
            user_email: None,
            admin_email: None,
            default_shift_start: default_shift_start(),
            default_shift_end: default_shift_end(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timewise")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timewise")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timewise.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timewise.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("timewise.sqlite")
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            // Keep an existing identity when re-initializing.
            let mut config = Self::load().unwrap_or_default();
            config.database = db_path.to_string_lossy().to_string();

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }

    /// Resolve the acting identity. Command-line overrides win over the file.
    pub fn identity(&self, user: Option<&str>, email: Option<&str>) -> AppResult<Identity> {
        let user_id = user
            .or(self.user_id.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(AppError::NotAuthenticated)?;

        let email = email.or(self.user_email.as_deref());

        Ok(Identity::new(user_id, email, self.admin_email.as_deref()))
    }

    /// Shift used by week writes when none is given.
    pub fn default_shift(&self) -> AppResult<(NaiveTime, NaiveTime)> {
        let start = parse_time(&self.default_shift_start)
            .ok_or_else(|| AppError::Config(format!("default_shift_start: {}", self.default_shift_start)))?;
        let end = parse_time(&self.default_shift_end)
            .ok_or_else(|| AppError::Config(format!("default_shift_end: {}", self.default_shift_end)))?;
        Ok((start, end))
    }
}
