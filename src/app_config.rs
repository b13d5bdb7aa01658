use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::line_reader;

/// Application configuration module
/// This module handles loading, validating and saving the settings of the
/// command line tool.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Encoding label used when no encoding is given on the command line
    #[serde(default = "default_encoding")]
    pub default_encoding: String,

    /// How parsed subtitles are printed
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output rendering of parsed subtitles
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Cue counts per file
    #[default]
    Summary,
    // @format: SubRip text
    Srt,
    // @format: Pretty printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Summary => "summary",
            Self::Srt => "srt",
            Self::Json => "json",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "srt" => Ok(Self::Srt),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Config {
    /// Load the configuration at `path`, writing a default one when the
    /// file doesn't exist yet.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);

            return serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()));
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;

        Ok(config)
    }

    /// Save the configuration as pretty printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if line_reader::lookup_encoding(&self.default_encoding).is_none() {
            return Err(anyhow!("Unknown default encoding: {}", self.default_encoding));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_encoding: default_encoding(),
            output_format: OutputFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}
