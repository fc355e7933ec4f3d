use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::sequencer::PlaybackTiming;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Milliseconds between playback steps (one sign per step)
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,

    /// Milliseconds between engine readiness polls
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,

    /// Milliseconds to wait for engine readiness before erroring out
    #[serde(default = "default_watchdog_ms")]
    pub watchdog_ms: u64,

    /// Gloss substituted when the input normalizes to nothing
    #[serde(default = "default_gloss")]
    pub default_gloss: String,

    /// Path to a JSON sign-catalog dataset; the built-in starter
    /// vocabulary is used when absent
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
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

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_step_ms() -> u64 {
    1000
}

fn default_poll_ms() -> u64 {
    250
}

fn default_watchdog_ms() -> u64 {
    10_000
}

fn default_gloss() -> String {
    "hello".to_string()
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .context(format!("Failed to create config file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .context("Failed to serialize configuration")?;
        Ok(())
    }

    /// Load the configuration from a file, or fall back to defaults
    /// (writing them out) when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.step_ms == 0 {
            return Err(anyhow!("step_ms must be greater than zero"));
        }
        if self.poll_ms == 0 {
            return Err(anyhow!("poll_ms must be greater than zero"));
        }
        if self.poll_ms > self.step_ms {
            return Err(anyhow!(
                "poll_ms ({}) must not exceed step_ms ({})",
                self.poll_ms,
                self.step_ms
            ));
        }
        if self.watchdog_ms < self.step_ms {
            return Err(anyhow!(
                "watchdog_ms ({}) must be at least step_ms ({})",
                self.watchdog_ms,
                self.step_ms
            ));
        }
        if self.default_gloss.trim().is_empty() {
            return Err(anyhow!("default_gloss must not be empty"));
        }
        Ok(())
    }

    /// Playback timing derived from this configuration
    pub fn timing(&self) -> PlaybackTiming {
        PlaybackTiming::from_millis(self.step_ms, self.poll_ms, self.watchdog_ms)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            step_ms: default_step_ms(),
            poll_ms: default_poll_ms(),
            watchdog_ms: default_watchdog_ms(),
            default_gloss: default_gloss(),
            catalog_path: None,
            log_level: LogLevel::default(),
        }
    }
}
