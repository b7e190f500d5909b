use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the backend log document (JSON)
    pub log_file: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
    #[serde(default = "default_export_format")]
    pub default_export_format: String,
    #[serde(default = "default_grid_cell_char")]
    pub grid_cell_char: String,
}

fn default_use_colors() -> bool {
    true
}
fn default_export_format() -> String {
    "csv".to_string()
}
fn default_grid_cell_char() -> String {
    "█".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_default().to_string_lossy().to_string(),
            use_colors: default_use_colors(),
            default_export_format: default_export_format(),
            grid_cell_char: default_grid_cell_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".eldview")
        } else {
            PathBuf::from(".eldview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldview.conf")
    }

    /// Default location of the backend log document
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("eld_logs.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file (and directory)
    pub fn init_all(custom_log_file: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let log_file = if let Some(name) = custom_log_file {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::log_file_default()
        };

        let config = Config {
            log_file: log_file.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Log file:    {:?}", log_file);

        Ok(())
    }
}
