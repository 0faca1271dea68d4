//! Integration tests for background schedule runs: event stream, virtual-time spacing,
//! and the one-run-at-a-time rule.

use linkpost::backend::{MockBackend, PublishReceipt};
use linkpost::error::{ApiError, ValidationError};
use linkpost::post::{ImageRef, PostDraft};
use linkpost::schedule::{PublishOutcome, ScheduleEvent, Scheduler, DEFAULT_INTERVAL};
use std::sync::Arc;
use std::time::Duration;

fn draft() -> PostDraft {
    PostDraft::new(
        Some("Weekly roundup".to_string()),
        Some(ImageRef::parse("https://example.com/roundup.png")),
    )
}

#[tokio::test(start_paused = true)]
async fn test_spawned_schedule_streams_events_in_order() {
    let backend = Arc::new(MockBackend::new().with_receipt(Err("connection reset")));
    let scheduler = Arc::new(Scheduler::new(
        backend.clone(),
        DEFAULT_INTERVAL,
        "generated_image.png",
    ));

    let mut handle = scheduler.spawn(&draft(), 2).unwrap();
    let mut events = Vec::new();
    while let Some(event) = handle.events.recv().await {
        events.push(event);
    }
    let report = handle.task.await.unwrap();

    assert_eq!(events.len(), 6);
    assert!(matches!(events[0], ScheduleEvent::Posting { day_index: 0 }));
    assert!(matches!(
        &events[1],
        ScheduleEvent::Attempt(a) if a.outcome == PublishOutcome::Failure
    ));
    assert!(matches!(events[2], ScheduleEvent::Waiting { day_index: 0, .. }));
    assert!(matches!(events[3], ScheduleEvent::Posting { day_index: 1 }));
    assert!(matches!(
        &events[4],
        ScheduleEvent::Attempt(a) if a.outcome == PublishOutcome::Success
    ));
    assert_eq!(events[5].to_string(), "All posts completed.");

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    let published = backend.published();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0], published[1]);
    assert_eq!(published[0].image_path, "https://example.com/roundup.png");
}

#[tokio::test(start_paused = true)]
async fn test_second_run_is_rejected_while_first_is_active() {
    let backend = Arc::new(MockBackend::new());
    let scheduler = Arc::new(Scheduler::new(
        backend.clone(),
        DEFAULT_INTERVAL,
        "generated_image.png",
    ));

    let first = scheduler.spawn(&draft(), 3).unwrap();
    assert!(scheduler.is_running());
    assert!(matches!(
        scheduler.spawn(&draft(), 1),
        Err(ApiError::ScheduleAlreadyRunning)
    ));

    let report = first.task.await.unwrap();
    assert_eq!(report.attempts.len(), 3);
    assert!(!scheduler.is_running());

    // a finished run frees the scheduler
    let second = scheduler.spawn(&draft(), 1).unwrap();
    assert_eq!(second.task.await.unwrap().attempts.len(), 1);
    assert_eq!(backend.published().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_status_reflects_progress_between_days() {
    let backend = Arc::new(
        MockBackend::new().with_receipt(Ok(PublishReceipt::accepted("Posted to LinkedIn"))),
    );
    let scheduler = Arc::new(Scheduler::new(
        backend,
        DEFAULT_INTERVAL,
        "generated_image.png",
    ));

    let mut handle = scheduler.spawn(&draft(), 2).unwrap();
    // wait for the first attempt and the waiting notice
    loop {
        match handle.events.recv().await {
            Some(ScheduleEvent::Waiting { .. }) => break,
            Some(_) => continue,
            None => panic!("schedule ended early"),
        }
    }

    let status = scheduler.status();
    assert!(status.running);
    assert!(status.message.starts_with("Waiting until"));
    assert_eq!(
        status.latest.map(|a| a.message),
        Some("Posted to LinkedIn".to_string())
    );

    tokio::time::advance(DEFAULT_INTERVAL + Duration::from_secs(1)).await;
    handle.task.await.unwrap();
    assert!(!scheduler.status().running);
}

#[tokio::test]
async fn test_invalid_day_count_makes_no_calls() {
    let backend = Arc::new(MockBackend::new());
    let scheduler = Arc::new(Scheduler::new(
        backend.clone(),
        Duration::ZERO,
        "generated_image.png",
    ));

    for days in [0, -5] {
        match scheduler.spawn(&draft(), days) {
            Err(ApiError::Validation(ValidationError::NonPositiveDayCount(n))) => {
                assert_eq!(n, days)
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("schedule with {} days should be rejected", days),
        }
    }
    assert_eq!(backend.call_count(), 0);
    assert!(!scheduler.is_running());
}
