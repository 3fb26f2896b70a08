//! Configuration for mailmerge

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file name
pub const LOCAL_CONFIG: &str = ".mailmerge.yml";

/// Input and output locations for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV file with one record per line
    #[serde(rename = "csv-path")]
    pub csv_path: PathBuf,

    /// Template containing the `%%1%%`..`%%4%%` placeholders
    #[serde(rename = "template-path")]
    pub template_path: PathBuf,

    /// Directory receiving `template-<id>.txt` files; cleared on every run
    #[serde(rename = "output-dir")]
    pub output_dir: PathBuf,

    /// Create the output directory if it does not exist
    #[serde(rename = "create-output-dir")]
    pub create_output_dir: bool,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data.csv"),
            template_path: PathBuf::from("template.txt"),
            output_dir: PathBuf::from("output"),
            create_output_dir: true,
            log_level: None,
        }
    }
}

impl Config {
    /// Build a config for explicit paths, everything else default
    pub fn new(csv_path: impl Into<PathBuf>, template_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            template_path: template_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates: Vec<PathBuf> = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::default_paths(),
        };

        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|config| config.log_level)
    }

    /// Replace configured paths with any given on the command line
    pub fn with_overrides(
        mut self,
        csv_path: Option<PathBuf>,
        template_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = csv_path {
            self.csv_path = path;
        }
        if let Some(path) = template_path {
            self.template_path = path;
        }
        if let Some(path) = output_dir {
            self.output_dir = path;
        }
        self
    }

    fn default_paths() -> Vec<PathBuf> {
        [
            Some(PathBuf::from(LOCAL_CONFIG)),
            dirs::config_dir().map(|p| p.join("mailmerge").join("mailmerge.yml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
