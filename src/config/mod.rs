use crate::core::aggregate::{AggregateOptions, DEFAULT_HOURS_SUFFIX};
use crate::core::calendar::LocaleLabels;
use crate::core::color::ColorScale;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_hours_suffix")]
    pub hours_suffix: String,
    #[serde(default = "default_label_width")]
    pub label_width: usize,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default)]
    pub colors: ColorScale,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("dataset.json")
        .to_string_lossy()
        .to_string()
}
fn default_locale() -> String {
    "en_US".to_string()
}
fn default_hours_suffix() -> String {
    DEFAULT_HOURS_SUFFIX.to_string()
}
fn default_label_width() -> usize {
    18
}
fn default_cell_width() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            locale: default_locale(),
            hours_suffix: default_hours_suffix(),
            label_width: default_label_width(),
            cell_width: default_cell_width(),
            colors: ColorScale::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimegrid")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimegrid")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimegrid.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the configuration from the standard location
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn labels(&self) -> AppResult<LocaleLabels> {
        LocaleLabels::new(&self.locale)
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            hours_suffix: self.hours_suffix.clone(),
        }
    }
}
