//! Vitrine - Automated social-media publication scheduler.
//!
//! Vitrine paces feed posts and stories for a single account on independent
//! timers, retries content generation until an acceptable artifact exists,
//! gates feed posts behind quality checks, and re-arms its timers with
//! randomized cooldowns.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitrine::{
//!     BotConfig, ConsolePublisher, DirectoryAssetResolver, Schedule, Scheduler,
//!     TemplateDriver, TemplateSet, TopicSelector,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_file("vitrine.toml")?;
//!     let templates = TemplateSet::from_file(&config.template_path)?;
//!
//!     let scheduler = Scheduler::new(
//!         TopicSelector::new(config.topics.clone())?,
//!         TemplateDriver::new(&config.brand, &config.template_name),
//!         DirectoryAssetResolver::new(config.image_dirs.clone()),
//!         ConsolePublisher::default(),
//!         templates,
//!         Schedule::from(&config.schedule),
//!     );
//!     scheduler.run().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vitrine is organized as a workspace with focused crates:
//!
//! - `vitrine_core` - Core data types (Topic, Artifact, TemplateSet, ...)
//! - `vitrine_interface` - Collaborator trait seams
//! - `vitrine_bot` - Scheduler, validation gate, config, metrics
//! - `vitrine_error` - Error taxonomy
//!
//! Real generation providers and publishers implement the traits in
//! `vitrine_interface`; the built-in [`TemplateDriver`] and
//! [`ConsolePublisher`] support offline rehearsal runs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod drivers;

pub use drivers::{ConsolePublisher, TemplateDriver};
pub use vitrine_bot::{
    ApiState, BotConfig, BotMetrics, DirectoryAssetResolver, MetricsSnapshot, PromptedGenerator,
    Schedule, ScheduleConfig, ScheduleState, Scheduler, TickOutcome, TopicSelector,
    TrackMetricSnapshot, create_router,
};
pub use vitrine_core::{
    Artifact, GenerateRequest, GenerateResponse, MediaReference, PostKind, TemplateSet, Topic,
};
pub use vitrine_error::{VitrineError, VitrineErrorKind, VitrineResult};
pub use vitrine_interface::{AssetResolver, ContentGenerator, Publisher, TextCompletion};
