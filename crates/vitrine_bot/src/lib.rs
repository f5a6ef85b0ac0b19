//! Publication scheduler and validation pipeline for automated social content.
//!
//! This crate is the stateful core of Vitrine. It decides *when* to act on two
//! independent cadences (feed posts and stories), retries content generation
//! until an acceptable artifact exists, gates feed posts behind quality
//! checks, and re-arms its timers with randomized cooldowns so the posting
//! rhythm never looks mechanical.
//!
//! External collaborators (generation provider, asset storage, publisher) are
//! consumed through the trait seams in `vitrine_interface`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod assets;
mod config;
mod generation;
mod metrics;
mod scheduler;
mod selector;
mod validation;

pub use api::{ApiState, create_router};
pub use assets::DirectoryAssetResolver;
pub use config::{BotConfig, Schedule, ScheduleConfig};
pub use generation::PromptedGenerator;
pub use metrics::{BotMetrics, MetricsSnapshot, TrackMetricSnapshot};
pub use scheduler::{ScheduleState, Scheduler, TickOutcome};
pub use selector::TopicSelector;
pub use validation::{EXPRESSIVE_SYMBOLS, MIN_NATURAL_CHARS, coherence_check, naturalness_check};
