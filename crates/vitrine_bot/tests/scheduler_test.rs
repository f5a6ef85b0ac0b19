//! Integration tests for scheduler timing and failure semantics.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use vitrine_bot::{Schedule, ScheduleConfig, ScheduleState, Scheduler, TickOutcome, TopicSelector};
use vitrine_core::{PostKind, TemplateSet, Topic};
use vitrine_error::{PublishError, PublishErrorKind, VitrineResult};
use vitrine_interface::{AssetResolver, ContentGenerator, Publisher};

/// Generator returning a caption that passes both validation checks.
struct HappyGenerator;

#[async_trait]
impl ContentGenerator for HappyGenerator {
    async fn generate(
        &self,
        _kind: PostKind,
        topic: &Topic,
        _templates: &TemplateSet,
    ) -> VitrineResult<String> {
        Ok(format!(
            "{} is great ✨ book now and enjoy a calm session with our team {}",
            topic.name(),
            "…".repeat(60)
        ))
    }
}

struct FixedResolver(PathBuf);

impl AssetResolver for FixedResolver {
    fn resolve_media(&self, _topic_key: &str) -> VitrineResult<PathBuf> {
        Ok(self.0.clone())
    }
}

#[derive(Clone)]
struct RecordingPublisher {
    fail: bool,
    posts: Arc<AtomicU32>,
    stories: Arc<AtomicU32>,
}

impl RecordingPublisher {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            posts: Arc::new(AtomicU32::new(0)),
            stories: Arc::new(AtomicU32::new(0)),
        }
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish_post(&self, _media_path: &Path, _text: &str) -> VitrineResult<()> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(PublishError::new(PublishErrorKind::Post("rejected".into())))?
        } else {
            Ok(())
        }
    }

    async fn publish_story(&self, _media_path: &Path) -> VitrineResult<()> {
        self.stories.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(PublishError::new(PublishErrorKind::Story(
                "rejected".into(),
            )))?
        } else {
            Ok(())
        }
    }
}

fn existing_image(dir: &tempfile::TempDir) -> PathBuf {
    let image = dir.path().join("promo.jpg");
    std::fs::write(&image, b"jpg").unwrap();
    image
}

fn empty_templates() -> TemplateSet {
    TemplateSet {
        content_templates: vec![],
        concepts: vec![],
    }
}

fn scheduler(
    publisher: RecordingPublisher,
    image: PathBuf,
) -> Scheduler<HappyGenerator, FixedResolver, RecordingPublisher> {
    let selector = TopicSelector::new(vec!["Laser Hair Removal".to_string()]).unwrap();
    Scheduler::new(
        selector,
        HappyGenerator,
        FixedResolver(image),
        publisher,
        empty_templates(),
        Schedule::from(&ScheduleConfig::default()),
    )
}

#[tokio::test]
async fn test_due_tick_publishes_once_and_rearms() {
    let dir = tempfile::tempdir().unwrap();
    let publisher = RecordingPublisher::new(false);
    let posts = Arc::clone(&publisher.posts);

    let now = Utc::now();
    let mut scheduler = scheduler(publisher, existing_image(&dir)).with_state(ScheduleState {
        last_post: now - ChronoDuration::hours(4) - ChronoDuration::seconds(1),
        last_story: now,
    });

    let outcome = scheduler.tick_post(now).await;
    assert!(matches!(outcome, TickOutcome::Published(_)));
    assert_eq!(posts.load(Ordering::SeqCst), 1);
    assert_eq!(scheduler.state().last_post, now);

    // A second immediate tick finds the interval unexpired.
    let outcome = scheduler.tick_post(now).await;
    assert_eq!(outcome, TickOutcome::NotDue);
    assert_eq!(posts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cooldown_is_within_configured_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let publisher = RecordingPublisher::new(false);

    let now = Utc::now();
    let mut scheduler = scheduler(publisher, existing_image(&dir)).with_state(ScheduleState {
        last_post: now - ChronoDuration::hours(5),
        last_story: now,
    });

    match scheduler.tick_post(now).await {
        TickOutcome::Published(cooldown) => {
            assert!(cooldown >= std::time::Duration::from_secs(300));
            assert!(cooldown <= std::time::Duration::from_secs(900));
        }
        other => panic!("expected publication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_publisher_failure_never_advances_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let publisher = RecordingPublisher::new(true);
    let posts = Arc::clone(&publisher.posts);

    let start = Utc::now() - ChronoDuration::hours(5);
    let mut scheduler = scheduler(publisher, existing_image(&dir)).with_state(ScheduleState {
        last_post: start,
        last_story: Utc::now(),
    });

    for i in 0..3 {
        let now = Utc::now();
        let outcome = scheduler.tick_post(now).await;
        assert_eq!(outcome, TickOutcome::Skipped);
        assert_eq!(posts.load(Ordering::SeqCst), i + 1);
        assert_eq!(scheduler.state().last_post, start);
    }
}

#[tokio::test]
async fn test_story_track_updates_only_its_own_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let publisher = RecordingPublisher::new(false);
    let stories = Arc::clone(&publisher.stories);
    let posts = Arc::clone(&publisher.posts);

    let now = Utc::now();
    let post_stamp = now - ChronoDuration::hours(1);
    let mut scheduler = scheduler(publisher, existing_image(&dir)).with_state(ScheduleState {
        last_post: post_stamp,
        last_story: now - ChronoDuration::hours(2) - ChronoDuration::seconds(1),
    });

    let outcome = scheduler.tick_story(now).await;
    assert!(matches!(outcome, TickOutcome::Published(_)));
    assert_eq!(stories.load(Ordering::SeqCst), 1);
    assert_eq!(posts.load(Ordering::SeqCst), 0);
    assert_eq!(scheduler.state().last_story, now);
    assert_eq!(scheduler.state().last_post, post_stamp);
}

#[tokio::test]
async fn test_missing_media_skips_story_cycle() {
    let publisher = RecordingPublisher::new(false);
    let stories = Arc::clone(&publisher.stories);

    let now = Utc::now();
    let mut scheduler = scheduler(publisher, PathBuf::from("/nonexistent/promo.jpg"))
        .with_state(ScheduleState {
            last_post: now,
            last_story: now - ChronoDuration::hours(3),
        });

    let outcome = scheduler.tick_story(now).await;
    assert_eq!(outcome, TickOutcome::Skipped);
    assert_eq!(stories.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_end_to_end_post_cycle() {
    // Catalog with a single topic, a generator whose caption mentions the
    // topic and carries an expressive symbol, and an existing image: both
    // validation checks pass and exactly one post goes out.
    let dir = tempfile::tempdir().unwrap();
    let publisher = RecordingPublisher::new(false);
    let posts = Arc::clone(&publisher.posts);

    let now = Utc::now();
    let mut scheduler = scheduler(publisher, existing_image(&dir)).with_state(ScheduleState {
        last_post: now - ChronoDuration::hours(4) - ChronoDuration::seconds(1),
        last_story: now,
    });

    let metrics = scheduler.metrics();
    let outcome = scheduler.tick_post(now).await;

    assert!(matches!(outcome, TickOutcome::Published(_)));
    assert_eq!(posts.load(Ordering::SeqCst), 1);
    assert_eq!(scheduler.state().last_post, now);
    assert_eq!(metrics.post_cycles(), 1);
    assert_eq!(metrics.post_failures(), 0);
}
