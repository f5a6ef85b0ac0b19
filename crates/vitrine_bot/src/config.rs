//! Bot configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use vitrine_error::{ConfigError, VitrineResult};

/// Configuration for the publication bot.
///
/// Everything numeric is overridable with defaults matching the baseline
/// cadence: posts every 4 hours, stories every 2, a 600 second poll loop, and
/// a 300-900 second cooldown after each successful publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Business name the content is written for
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Topic catalog (display names); must be non-empty
    pub topics: Vec<String>,
    /// Topic key to image directory mapping
    #[serde(default)]
    pub image_dirs: HashMap<String, PathBuf>,
    /// Path to the JSON template set
    pub template_path: PathBuf,
    /// Name of the content template used for both posts and stories
    #[serde(default = "default_template_name")]
    pub template_name: String,
    /// Scheduling parameters
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Optional listen address for the metrics API
    #[serde(default)]
    pub api_addr: Option<SocketAddr>,
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}

fn default_template_name() -> String {
    "Service Content Template".to_string()
}

fn default_brand() -> String {
    "our studio".to_string()
}

/// Scheduling parameters for the two publication tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Minimum hours between feed posts
    #[serde(default = "default_post_interval_hours")]
    pub post_interval_hours: u64,
    /// Minimum hours between stories
    #[serde(default = "default_story_interval_hours")]
    pub story_interval_hours: u64,
    /// Outer polling interval (seconds)
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Lower bound of the post-success cooldown (seconds)
    #[serde(default = "default_cooldown_min_secs")]
    pub cooldown_min_secs: u64,
    /// Upper bound of the post-success cooldown (seconds)
    #[serde(default = "default_cooldown_max_secs")]
    pub cooldown_max_secs: u64,
    /// Maximum generation attempts per acquisition (0 = unbounded)
    #[serde(default = "default_max_generation_attempts")]
    pub max_generation_attempts: u32,
}

fn default_post_interval_hours() -> u64 {
    4
}

fn default_story_interval_hours() -> u64 {
    2
}

fn default_poll_interval_secs() -> u64 {
    600
}

fn default_cooldown_min_secs() -> u64 {
    300
}

fn default_cooldown_max_secs() -> u64 {
    900
}

fn default_max_generation_attempts() -> u32 {
    8
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            post_interval_hours: default_post_interval_hours(),
            story_interval_hours: default_story_interval_hours(),
            poll_interval_secs: default_poll_interval_secs(),
            cooldown_min_secs: default_cooldown_min_secs(),
            cooldown_max_secs: default_cooldown_max_secs(),
            max_generation_attempts: default_max_generation_attempts(),
        }
    }
}

/// Resolved schedule durations derived from [`ScheduleConfig`].
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Minimum elapsed time before the next feed post
    pub post_interval: chrono::Duration,
    /// Minimum elapsed time before the next story
    pub story_interval: chrono::Duration,
    /// Outer polling sleep between ticks
    pub poll_interval: std::time::Duration,
    /// Post-success cooldown bounds (inclusive)
    pub cooldown_min: std::time::Duration,
    /// Upper cooldown bound (inclusive)
    pub cooldown_max: std::time::Duration,
    /// Attempt budget for the acquisition loop (0 = unbounded)
    pub max_generation_attempts: u32,
}

impl From<&ScheduleConfig> for Schedule {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            post_interval: chrono::Duration::hours(config.post_interval_hours as i64),
            story_interval: chrono::Duration::hours(config.story_interval_hours as i64),
            poll_interval: std::time::Duration::from_secs(config.poll_interval_secs),
            cooldown_min: std::time::Duration::from_secs(config.cooldown_min_secs),
            cooldown_max: std::time::Duration::from_secs(config.cooldown_max_secs),
            max_generation_attempts: config.max_generation_attempts,
        }
    }
}
