//! Scheduler run command handler.

use vitrine::{ConsolePublisher, TemplateDriver};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use vitrine_bot::{
    ApiState, BotConfig, DirectoryAssetResolver, Schedule, Scheduler, TopicSelector, create_router,
};
use vitrine_core::TemplateSet;
use vitrine_error::VitrineResult;

/// Runs the scheduler loop with the built-in rehearsal collaborators.
///
/// Real deployments construct [`Scheduler`] directly with provider-backed
/// implementations of the interface traits; this command exists so operators
/// can validate pacing, templates, and assets end to end without posting.
pub async fn run_scheduler(config_path: &Path) -> VitrineResult<()> {
    let config = BotConfig::from_file(config_path)?;
    let templates = TemplateSet::from_file(&config.template_path)?;

    let selector = TopicSelector::new(config.topics.clone())?;
    let generator = TemplateDriver::new(&config.brand, &config.template_name);
    let resolver = DirectoryAssetResolver::new(config.image_dirs.clone());
    let publisher = ConsolePublisher;

    let scheduler = Scheduler::new(
        selector,
        generator,
        resolver,
        publisher,
        templates,
        Schedule::from(&config.schedule),
    );

    if let Some(addr) = config.api_addr {
        let state = ApiState::new(Arc::new(scheduler.metrics()));
        let router = create_router(state);
        tokio::spawn(async move {
            info!(%addr, "Metrics API listening");
            match tokio::net::TcpListener::bind(addr).await {
                Ok(listener) => {
                    if let Err(e) = axum::serve(listener, router).await {
                        error!(error = %e, "Metrics API server stopped");
                    }
                }
                Err(e) => error!(error = %e, "Failed to bind metrics API"),
            }
        });
    }

    info!(brand = %config.brand, "Starting rehearsal scheduler");
    scheduler.run().await;
    Ok(())
}
