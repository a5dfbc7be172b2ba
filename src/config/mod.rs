use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Name of the durable slot holding the event collection.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Timeline units per hour (the day view is 24 rows of this height).
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: f64,
    #[serde(default = "default_width_budget")]
    pub width_budget: f64,
    #[serde(default)]
    pub min_event_height: f64,
    /// Text rows per hour when drawing the day timeline in the terminal.
    #[serde(default = "default_rows_per_hour")]
    pub timeline_rows_per_hour: u32,
    /// Quote CSV fields (RFC 4180). `false` writes plain comma-joined rows.
    #[serde(default = "default_true")]
    pub csv_quoting: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_event_type")]
    pub default_event_type: EventType,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
}

fn default_storage_key() -> String {
    "events".to_string()
}
fn default_pixels_per_hour() -> f64 {
    80.0
}
fn default_width_budget() -> f64 {
    0.95
}
fn default_rows_per_hour() -> u32 {
    2
}
fn default_true() -> bool {
    true
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}
fn default_event_type() -> EventType {
    EventType::Other
}
fn default_start() -> String {
    "09:00".to_string()
}
fn default_end() -> String {
    "10:00".to_string()
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
            storage_key: default_storage_key(),
            pixels_per_hour: default_pixels_per_hour(),
            width_budget: default_width_budget(),
            min_event_height: 0.0,
            timeline_rows_per_hour: default_rows_per_hour(),
            csv_quoting: true,
            date_format: default_date_format(),
            time_format: default_time_format(),
            default_event_type: default_event_type(),
            default_start: default_start(),
            default_end: default_end(),
        }
    }

    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rcalendar")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcalendar.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcalendar.sqlite")
    }

    /// Load configuration from the standard location, or defaults if the
    /// file does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would break rendering later on.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.width_budget > 0.0 && self.width_budget <= 1.0) {
            return Err(AppError::Config(format!(
                "width_budget must be in (0, 1], got {}",
                self.width_budget
            )));
        }
        if self.pixels_per_hour <= 0.0 {
            return Err(AppError::Config(format!(
                "pixels_per_hour must be positive, got {}",
                self.pixels_per_hour
            )));
        }
        if self.timeline_rows_per_hour == 0 || 60 % self.timeline_rows_per_hour != 0 {
            return Err(AppError::Config(format!(
                "timeline_rows_per_hour must divide 60, got {}",
                self.timeline_rows_per_hour
            )));
        }
        for fmt in [&self.date_format, &self.time_format] {
            if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
                return Err(AppError::Config(format!("invalid format string '{fmt}'")));
            }
        }
        self.default_times()?;
        Ok(())
    }

    /// Default clock times for a newly added event.
    pub fn default_times(&self) -> AppResult<(NaiveTime, NaiveTime)> {
        let start = parse_time(&self.default_start)
            .ok_or_else(|| AppError::Config(format!("default_start '{}'", self.default_start)))?;
        let end = parse_time(&self.default_end)
            .ok_or_else(|| AppError::Config(format!("default_end '{}'", self.default_end)))?;
        Ok((start, end))
    }

    /// Initialize configuration directory, config file and database file.
    ///
    /// Returns the resolved database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
