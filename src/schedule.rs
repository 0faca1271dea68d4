//! Scheduling Orchestrator
//!
//! Publishes one post per day for N days. Each day runs to completion (publish,
//! record, notify) before the task suspends for the configured interval. Failed days
//! are recorded and the loop moves on; there is no retry and no abort.
//!
//! A `Scheduler` runs one schedule at a time. Starting a second run while one is
//! active is rejected with `ApiError::ScheduleAlreadyRunning`.

use crate::backend::Backend;
use crate::error::{ApiError, ValidationError};
use crate::post::{receipt_outcome, PostDraft, ReadyPost};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Default spacing between scheduled posts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest accepted spacing between scheduled posts.
pub const MAX_INTERVAL: Duration = Duration::from_secs(366 * 24 * 60 * 60);

/// Number of days to post for. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    day_count: u64,
}

impl ScheduleConfig {
    pub fn new(day_count: i64) -> Result<Self, ValidationError> {
        if day_count < 1 {
            return Err(ValidationError::NonPositiveDayCount(day_count));
        }
        Ok(Self {
            day_count: day_count as u64,
        })
    }

    pub fn day_count(&self) -> u64 {
        self.day_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishOutcome {
    Success,
    Failure,
}

/// Outcome of one scheduled day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishAttempt {
    /// Zero-based day
    pub day_index: u64,
    pub outcome: PublishOutcome,
    pub message: String,
    pub attempted_at: DateTime<Utc>,
}

impl PublishAttempt {
    pub fn is_success(&self) -> bool {
        self.outcome == PublishOutcome::Success
    }
}

/// Progress notifications emitted while a schedule runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScheduleEvent {
    Posting { day_index: u64 },
    Attempt(PublishAttempt),
    /// `resume_at` is `None` when the wake-up time is not representable.
    Waiting {
        day_index: u64,
        resume_at: Option<DateTime<Utc>>,
    },
    Completed { succeeded: u64, failed: u64 },
}

impl fmt::Display for ScheduleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleEvent::Posting { day_index } => write!(f, "Posting for day {}", day_index + 1),
            ScheduleEvent::Attempt(attempt) => match attempt.outcome {
                PublishOutcome::Success => write!(
                    f,
                    "Content successfully uploaded to LinkedIn. ({})",
                    attempt.message
                ),
                PublishOutcome::Failure => write!(
                    f,
                    "Error posting to LinkedIn due to {}",
                    attempt.message
                ),
            },
            ScheduleEvent::Waiting {
                day_index,
                resume_at: Some(resume_at),
            } => write!(
                f,
                "Waiting until {} to post day {}",
                resume_at.to_rfc3339(),
                day_index + 2
            ),
            ScheduleEvent::Waiting {
                day_index,
                resume_at: None,
            } => write!(f, "Waiting to post day {}", day_index + 2),
            ScheduleEvent::Completed { .. } => write!(f, "All posts completed."),
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleReport {
    pub day_count: u64,
    pub attempts: Vec<PublishAttempt>,
}

impl ScheduleReport {
    pub fn succeeded(&self) -> u64 {
        self.attempts.iter().filter(|a| a.is_success()).count() as u64
    }

    pub fn failed(&self) -> u64 {
        self.attempts.len() as u64 - self.succeeded()
    }
}

/// Latest user-visible state of the scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStatus {
    pub running: bool,
    pub message: String,
    pub latest: Option<PublishAttempt>,
}

/// Clears the active flag and the status board's running bit when a run ends,
/// however it ends.
struct RunGuard {
    active: Arc<AtomicBool>,
    status: Arc<RwLock<ScheduleStatus>>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.status.write().running = false;
        self.active.store(false, Ordering::SeqCst);
    }
}

/// Background schedule run.
pub struct ScheduleHandle {
    pub events: mpsc::UnboundedReceiver<ScheduleEvent>,
    pub task: JoinHandle<ScheduleReport>,
}

pub struct Scheduler {
    backend: Arc<dyn Backend>,
    interval: Duration,
    generated_image_path: String,
    active: Arc<AtomicBool>,
    status: Arc<RwLock<ScheduleStatus>>,
}

impl Scheduler {
    pub fn new(
        backend: Arc<dyn Backend>,
        interval: Duration,
        generated_image_path: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            interval,
            generated_image_path: generated_image_path.into(),
            active: Arc::new(AtomicBool::new(false)),
            status: Arc::new(RwLock::new(ScheduleStatus::default())),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> ScheduleStatus {
        self.status.read().clone()
    }

    /// Run a schedule on the current task.
    pub async fn run(
        &self,
        draft: &PostDraft,
        day_count: i64,
        events: &mpsc::UnboundedSender<ScheduleEvent>,
    ) -> Result<ScheduleReport, ApiError> {
        let (post, config, guard) = self.begin(draft, day_count)?;
        Ok(self.execute(post, config, guard, events).await)
    }

    /// Run a schedule as a background task. Validation and the one-run-at-a-time
    /// check happen before this returns.
    pub fn spawn(
        self: &Arc<Self>,
        draft: &PostDraft,
        day_count: i64,
    ) -> Result<ScheduleHandle, ApiError> {
        let (post, config, guard) = self.begin(draft, day_count)?;
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Arc::clone(self);
        let task = tokio::spawn(async move { scheduler.execute(post, config, guard, &tx).await });
        Ok(ScheduleHandle { events: rx, task })
    }

    fn begin(
        &self,
        draft: &PostDraft,
        day_count: i64,
    ) -> Result<(ReadyPost, ScheduleConfig, RunGuard), ApiError> {
        let config = ScheduleConfig::new(day_count)?;
        let post = draft.ready()?;
        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ApiError::ScheduleAlreadyRunning);
        }
        let guard = RunGuard {
            active: Arc::clone(&self.active),
            status: Arc::clone(&self.status),
        };
        Ok((post, config, guard))
    }

    async fn execute(
        &self,
        post: ReadyPost,
        config: ScheduleConfig,
        _guard: RunGuard,
        events: &mpsc::UnboundedSender<ScheduleEvent>,
    ) -> ScheduleReport {
        let request = post.to_request(&self.generated_image_path);
        let day_count = config.day_count();
        let mut attempts = Vec::with_capacity(day_count.min(1024) as usize);

        info!(day_count, interval_secs = self.interval.as_secs(), "Starting posting schedule");
        self.status.write().running = true;

        for day_index in 0..day_count {
            self.emit(events, ScheduleEvent::Posting { day_index });

            let (outcome, message) = match self.backend.publish(&request).await {
                Ok(receipt) => match receipt_outcome(receipt) {
                    Ok(status) => (PublishOutcome::Success, status),
                    Err(error) => (PublishOutcome::Failure, error),
                },
                Err(e) => (PublishOutcome::Failure, e.to_string()),
            };
            match outcome {
                PublishOutcome::Success => info!(day = day_index + 1, "Scheduled post published"),
                PublishOutcome::Failure => {
                    warn!(day = day_index + 1, error = %message, "Scheduled post failed")
                }
            }

            let attempt = PublishAttempt {
                day_index,
                outcome,
                message,
                attempted_at: Utc::now(),
            };
            attempts.push(attempt.clone());
            self.emit(events, ScheduleEvent::Attempt(attempt));

            if day_index + 1 < day_count && !self.interval.is_zero() {
                let resume_at = chrono::Duration::from_std(self.interval)
                    .ok()
                    .and_then(|delay| Utc::now().checked_add_signed(delay));
                self.emit(events, ScheduleEvent::Waiting { day_index, resume_at });
                tokio::time::sleep(self.interval).await;
            }
        }

        let report = ScheduleReport {
            day_count,
            attempts,
        };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Posting schedule completed"
        );
        self.emit(
            events,
            ScheduleEvent::Completed {
                succeeded: report.succeeded(),
                failed: report.failed(),
            },
        );
        self.status.write().running = false;
        report
    }

    /// Update the status board and notify listeners. A closed receiver is ignored.
    fn emit(&self, events: &mpsc::UnboundedSender<ScheduleEvent>, event: ScheduleEvent) {
        {
            let mut status = self.status.write();
            status.message = event.to_string();
            if let ScheduleEvent::Attempt(attempt) = &event {
                status.latest = Some(attempt.clone());
            }
        }
        let _ = events.send(event);
    }
}
