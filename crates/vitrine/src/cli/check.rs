//! Deployment validation command handler.

use std::path::Path;
use tracing::{info, warn};
use vitrine_bot::{BotConfig, TopicSelector};
use vitrine_core::{TemplateSet, Topic};
use vitrine_error::{ConfigError, VitrineResult};

/// Validates a deployment without publishing anything.
///
/// Fatal problems (unreadable config, empty catalog, missing template) are
/// returned as errors; per-topic gaps such as a missing image folder are
/// reported as warnings since the scheduler skips those cycles at runtime.
pub fn check_deployment(config_path: &Path) -> VitrineResult<()> {
    let config = BotConfig::from_file(config_path)?;
    info!(path = %config_path.display(), "Configuration parsed");

    // Empty catalogs are fatal at startup, not per tick.
    let selector = TopicSelector::new(config.topics.clone())?;
    info!(topics = selector.len(), "Topic catalog loaded");

    let templates = TemplateSet::from_file(&config.template_path)?;
    if templates.content_template(&config.template_name).is_none() {
        return Err(ConfigError::new(format!(
            "Content template '{}' not found in {}",
            config.template_name,
            config.template_path.display()
        )))?;
    }
    info!(
        templates = templates.content_templates.len(),
        concepts = templates.concepts.len(),
        "Template set loaded"
    );

    let mut gaps = 0usize;
    for name in &config.topics {
        let topic = Topic::new(name.clone());
        if templates.concept(topic.name()).is_none() {
            warn!(topic = %topic.name(), "No concept entry; feed posts for this topic will fail");
            gaps += 1;
        }
        match config.image_dirs.get(topic.key()) {
            Some(dir) if dir.is_dir() => {}
            Some(dir) => {
                warn!(topic = %topic.name(), dir = %dir.display(), "Image directory does not exist");
                gaps += 1;
            }
            None => {
                warn!(topic = %topic.name(), "No image directory mapped");
                gaps += 1;
            }
        }
    }

    if gaps == 0 {
        info!("Deployment check passed with no gaps");
    } else {
        info!(gaps, "Deployment check passed with warnings");
    }
    Ok(())
}
