//! The publication scheduler.
//!
//! Owns the only durable state in the system: the timestamps of the last
//! successful feed post and story. Each tick evaluates the post track first,
//! then the story track, strictly sequentially. A successful publication
//! re-arms its own timer and stacks a randomized cooldown on top of the outer
//! poll sleep; a failed publication leaves the timestamp untouched so the
//! next tick retries immediately.

use crate::config::Schedule;
use crate::metrics::BotMetrics;
use crate::selector::TopicSelector;
use crate::validation::{coherence_check, naturalness_check};
use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};
use vitrine_core::{Artifact, MediaReference, PostKind, TemplateSet};
use vitrine_error::{
    GenerationError, GenerationErrorKind, ValidationError, ValidationErrorKind, VitrineResult,
};
use vitrine_interface::{AssetResolver, ContentGenerator, Publisher};

/// Timestamps of the last successful publication per track.
///
/// Initialized to `now - interval` sentinels so both tracks are due on the
/// very first tick. A publication of a given kind updates only its own
/// timestamp; the tracks never block each other's pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleState {
    /// Last successful feed post
    pub last_post: DateTime<Utc>,
    /// Last successful story
    pub last_story: DateTime<Utc>,
}

impl ScheduleState {
    /// Creates sentinel state allowing an immediate first publication of
    /// both kinds.
    pub fn starting_now(now: DateTime<Utc>, schedule: &Schedule) -> Self {
        Self {
            last_post: now - schedule.post_interval,
            last_story: now - schedule.story_interval,
        }
    }
}

/// Outcome of evaluating one track during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The track's interval has not elapsed yet
    NotDue,
    /// The cycle was attempted but aborted; the timestamp is untouched
    Skipped,
    /// Published successfully; sleep this cooldown before continuing
    Published(std::time::Duration),
}

/// The publication scheduler and sole owner of [`ScheduleState`].
pub struct Scheduler<G, A, P>
where
    G: ContentGenerator,
    A: AssetResolver,
    P: Publisher,
{
    selector: TopicSelector,
    generator: G,
    resolver: A,
    publisher: P,
    templates: TemplateSet,
    schedule: Schedule,
    state: ScheduleState,
    metrics: BotMetrics,
}

impl<G, A, P> Scheduler<G, A, P>
where
    G: ContentGenerator,
    A: AssetResolver,
    P: Publisher,
{
    /// Creates a scheduler with sentinel state so the first tick fires both
    /// tracks.
    pub fn new(
        selector: TopicSelector,
        generator: G,
        resolver: A,
        publisher: P,
        templates: TemplateSet,
        schedule: Schedule,
    ) -> Self {
        let state = ScheduleState::starting_now(Utc::now(), &schedule);
        Self {
            selector,
            generator,
            resolver,
            publisher,
            templates,
            schedule,
            state,
            metrics: BotMetrics::new(),
        }
    }

    /// Replaces the schedule state, e.g. to resume a previous cadence.
    pub fn with_state(mut self, state: ScheduleState) -> Self {
        self.state = state;
        self
    }

    /// Current schedule state.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Handle to the shared metrics collector.
    pub fn metrics(&self) -> BotMetrics {
        self.metrics.clone()
    }

    /// Runs the scheduler loop forever.
    ///
    /// Both cooldown sleeps and the outer poll sleep block the whole loop;
    /// the tracks are evaluated sequentially within each tick, post first.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!(
            poll_secs = self.schedule.poll_interval.as_secs(),
            "Publication scheduler started"
        );

        loop {
            let now = Utc::now();

            if let TickOutcome::Published(cooldown) = self.tick_post(now).await {
                info!(secs = cooldown.as_secs(), "Cooling down after post");
                sleep(cooldown).await;
            }

            if let TickOutcome::Published(cooldown) = self.tick_story(now).await {
                info!(secs = cooldown.as_secs(), "Cooling down after story");
                sleep(cooldown).await;
            }

            sleep(self.schedule.poll_interval).await;
        }
    }

    /// Evaluates the feed post track for one tick.
    pub async fn tick_post(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if now - self.state.last_post < self.schedule.post_interval {
            return TickOutcome::NotDue;
        }
        self.metrics.record_post_cycle();

        let artifact = match self.acquire(PostKind::Post).await {
            Ok(artifact) => artifact,
            Err(e) => {
                error!(error = %e, "Post acquisition failed, skipping cycle");
                self.metrics.record_post_failure();
                return TickOutcome::Skipped;
            }
        };

        let media = match self.resolve_media(&artifact) {
            Ok(media) => media,
            Err(()) => {
                self.metrics.record_post_failure();
                return TickOutcome::Skipped;
            }
        };

        if !coherence_check(&artifact.topic, &artifact.text, media.path()) {
            let e = ValidationError::new(ValidationErrorKind::Incoherent(
                artifact.topic.name().to_string(),
            ));
            warn!(error = %e, "Aborting post attempt");
            self.metrics.record_post_failure();
            return TickOutcome::Skipped;
        }

        if !naturalness_check(&artifact.text) {
            let e = ValidationError::new(ValidationErrorKind::Unnatural {
                length: artifact.text.chars().count(),
            });
            warn!(error = %e, "Aborting post attempt");
            self.metrics.record_post_failure();
            return TickOutcome::Skipped;
        }

        match self.publisher.publish_post(media.path(), &artifact.text).await {
            Ok(()) => {
                info!(topic = %artifact.topic.name(), "Published feed post");
                self.state.last_post = now;
                self.metrics.record_post_success();
                TickOutcome::Published(self.cooldown())
            }
            Err(e) => {
                // Timestamp stays put so the next tick retries immediately.
                error!(error = %e, topic = %artifact.topic.name(), "Post publication failed");
                self.metrics.record_post_failure();
                TickOutcome::Skipped
            }
        }
    }

    /// Evaluates the story track for one tick.
    ///
    /// Stories require only that the media exists; the coherence and
    /// naturalness gates apply to feed posts alone.
    pub async fn tick_story(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if now - self.state.last_story < self.schedule.story_interval {
            return TickOutcome::NotDue;
        }
        self.metrics.record_story_cycle();

        let artifact = match self.acquire(PostKind::Story).await {
            Ok(artifact) => artifact,
            Err(e) => {
                error!(error = %e, "Story acquisition failed, skipping cycle");
                self.metrics.record_story_failure();
                return TickOutcome::Skipped;
            }
        };

        let media = match self.resolve_media(&artifact) {
            Ok(media) => media,
            Err(()) => {
                self.metrics.record_story_failure();
                return TickOutcome::Skipped;
            }
        };

        if !media.exists() {
            warn!(path = %media.path().display(), "Story media vanished before publication");
            self.metrics.record_story_failure();
            return TickOutcome::Skipped;
        }

        match self.publisher.publish_story(media.path()).await {
            Ok(()) => {
                info!(topic = %artifact.topic.name(), "Published story");
                self.state.last_story = now;
                self.metrics.record_story_success();
                TickOutcome::Published(self.cooldown())
            }
            Err(e) => {
                error!(error = %e, topic = %artifact.topic.name(), "Story publication failed");
                self.metrics.record_story_failure();
                TickOutcome::Skipped
            }
        }
    }

    /// Repeatedly selects a fresh topic and generates content until an
    /// artifact exists or the attempt budget runs out.
    ///
    /// Every retry draws a new topic, which keeps content varied when the
    /// provider is flaky about particular subjects.
    async fn acquire(&self, kind: PostKind) -> VitrineResult<Artifact> {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let topic = self.selector.select();
            match self.generator.generate(kind, &topic, &self.templates).await {
                Ok(text) => return Ok(Artifact::new(kind, topic, text)),
                Err(e) => {
                    warn!(
                        kind = %kind,
                        topic = %topic.name(),
                        error = %e,
                        "Generation failed, selecting a new topic"
                    );
                    let budget = self.schedule.max_generation_attempts;
                    if budget != 0 && attempts >= budget {
                        return Err(GenerationError::new(GenerationErrorKind::Exhausted {
                            attempts,
                        }))?;
                    }
                }
            }
        }
    }

    fn resolve_media(&self, artifact: &Artifact) -> Result<MediaReference, ()> {
        match self.resolver.resolve_media(artifact.topic.key()) {
            Ok(path) => Ok(MediaReference::new(artifact.topic.key(), path)),
            Err(e) => {
                error!(
                    error = %e,
                    topic = %artifact.topic.name(),
                    "Media resolution failed, skipping cycle"
                );
                Err(())
            }
        }
    }

    /// Uniformly sampled cooldown between the configured bounds.
    fn cooldown(&self) -> std::time::Duration {
        let min = self.schedule.cooldown_min.as_secs();
        let max = self.schedule.cooldown_max.as_secs().max(min);
        let mut rng = rand::thread_rng();
        std::time::Duration::from_secs(rng.gen_range(min..=max))
    }
}
