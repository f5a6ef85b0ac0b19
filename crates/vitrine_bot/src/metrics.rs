//! Metrics collection for the publication tracks.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector shared between the scheduler and the metrics API.
#[derive(Debug, Clone)]
pub struct BotMetrics {
    inner: Arc<BotMetricsInner>,
}

#[derive(Debug)]
struct BotMetricsInner {
    // Cycle counts per track (a cycle is one due-tick evaluation)
    post_cycles: AtomicU64,
    story_cycles: AtomicU64,

    // Aborted cycles per track (acquisition, media, validation, publish)
    post_failures: AtomicU64,
    story_failures: AtomicU64,

    // Last successful publication per track
    post_last_success: parking_lot::Mutex<Option<Instant>>,
    story_last_success: parking_lot::Mutex<Option<Instant>>,
}

impl Default for BotMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BotMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BotMetricsInner {
                post_cycles: AtomicU64::new(0),
                story_cycles: AtomicU64::new(0),
                post_failures: AtomicU64::new(0),
                story_failures: AtomicU64::new(0),
                post_last_success: parking_lot::Mutex::new(None),
                story_last_success: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records a post cycle attempt.
    pub fn record_post_cycle(&self) {
        self.inner.post_cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful post publication.
    pub fn record_post_success(&self) {
        *self.inner.post_last_success.lock() = Some(Instant::now());
    }

    /// Records an aborted post cycle.
    pub fn record_post_failure(&self) {
        self.inner.post_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a story cycle attempt.
    pub fn record_story_cycle(&self) {
        self.inner.story_cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful story publication.
    pub fn record_story_success(&self) {
        *self.inner.story_last_success.lock() = Some(Instant::now());
    }

    /// Records an aborted story cycle.
    pub fn record_story_failure(&self) {
        self.inner.story_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Post cycle count.
    pub fn post_cycles(&self) -> u64 {
        self.inner.post_cycles.load(Ordering::Relaxed)
    }

    /// Aborted post cycle count.
    pub fn post_failures(&self) -> u64 {
        self.inner.post_failures.load(Ordering::Relaxed)
    }

    /// Time since the last successful post, if any.
    pub fn post_time_since_success(&self) -> Option<std::time::Duration> {
        self.inner
            .post_last_success
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Story cycle count.
    pub fn story_cycles(&self) -> u64 {
        self.inner.story_cycles.load(Ordering::Relaxed)
    }

    /// Aborted story cycle count.
    pub fn story_failures(&self) -> u64 {
        self.inner.story_failures.load(Ordering::Relaxed)
    }

    /// Time since the last successful story, if any.
    pub fn story_time_since_success(&self) -> Option<std::time::Duration> {
        self.inner
            .story_last_success
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Overall success rate across both tracks (0.0 - 1.0).
    pub fn overall_success_rate(&self) -> f64 {
        let total_cycles = self.post_cycles() + self.story_cycles();
        let total_failures = self.post_failures() + self.story_failures();

        if total_cycles == 0 {
            return 1.0;
        }

        let successes = total_cycles.saturating_sub(total_failures);
        successes as f64 / total_cycles as f64
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            post: TrackMetricSnapshot {
                cycles: self.post_cycles(),
                failures: self.post_failures(),
                seconds_since_success: self.post_time_since_success().map(|d| d.as_secs()),
            },
            story: TrackMetricSnapshot {
                cycles: self.story_cycles(),
                failures: self.story_failures(),
                seconds_since_success: self.story_time_since_success().map(|d| d.as_secs()),
            },
            overall_success_rate: self.overall_success_rate(),
        }
    }
}

/// Serializable snapshot of both tracks.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Feed post track metrics
    pub post: TrackMetricSnapshot,
    /// Story track metrics
    pub story: TrackMetricSnapshot,
    /// Overall success rate across both tracks
    pub overall_success_rate: f64,
}

/// Serializable snapshot of a single publication track.
#[derive(Debug, Clone, Serialize)]
pub struct TrackMetricSnapshot {
    /// Number of due-tick cycles attempted
    pub cycles: u64,
    /// Number of aborted cycles
    pub failures: u64,
    /// Seconds since the last successful publication
    pub seconds_since_success: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate_with_no_cycles() {
        let metrics = BotMetrics::new();
        assert_eq!(metrics.overall_success_rate(), 1.0);
    }

    #[test]
    fn test_snapshot_counts() {
        let metrics = BotMetrics::new();
        metrics.record_post_cycle();
        metrics.record_post_cycle();
        metrics.record_post_failure();
        metrics.record_story_cycle();
        metrics.record_story_success();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.post.cycles, 2);
        assert_eq!(snapshot.post.failures, 1);
        assert_eq!(snapshot.story.cycles, 1);
        assert_eq!(snapshot.story.seconds_since_success, Some(0));
        assert!((snapshot.overall_success_rate - 2.0 / 3.0).abs() < 1e-9);
    }
}
