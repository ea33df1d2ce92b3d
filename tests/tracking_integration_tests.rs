//! Integration tests for delivery tracking using fake implementations
//!
//! These tests exercise the [`MessageTracker`] polling loop through the
//! trait-based fakes: timeouts, status progressions, indexing lag, rate
//! limiting, and terminal failures, all without network calls or waiting.

use std::time::Duration;

use alloy_primitives::FixedBytes;
use hubspoke::testing::{message_with_status, FakeClock, FakeReply, FakeStatusProvider};
use hubspoke::{BridgeError, MessageStatus, MessageTracker, PollingConfig};

/// Helper to create a tracker with fake providers
fn create_tracker(
    status_provider: FakeStatusProvider,
    clock: FakeClock,
    config: PollingConfig,
) -> MessageTracker<FakeStatusProvider, FakeClock> {
    MessageTracker::builder()
        .status_provider(status_provider)
        .clock(clock)
        .config(config)
        .build()
}

#[tokio::test]
async fn test_delivery_timeout_with_fake_clock() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([1u8; 32]);

    fake_status.add_always_inflight(tx_hash);

    let max_attempts = 5;
    let poll_interval = 10;
    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default()
            .with_max_attempts(max_attempts)
            .with_poll_interval_secs(poll_interval),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;

    assert!(result.is_err(), "Expected timeout error");
    assert!(
        matches!(result.unwrap_err(), BridgeError::DeliveryTimeout),
        "Expected DeliveryTimeout error"
    );

    assert_eq!(
        fake_clock.sleep_count(),
        max_attempts as usize,
        "Should have slept max_attempts times"
    );

    let expected_sleep = Duration::from_secs(poll_interval * max_attempts as u64);
    assert_eq!(
        fake_clock.total_sleep_time(),
        expected_sleep,
        "Total sleep time should match poll_interval * max_attempts"
    );

    assert_eq!(
        fake_status.call_count(tx_hash),
        max_attempts as usize,
        "Should have polled max_attempts times"
    );
}

#[tokio::test]
async fn test_status_progression_to_delivered() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([2u8; 32]);

    fake_status.add_status_sequence(
        tx_hash,
        vec![
            MessageStatus::Inflight,
            MessageStatus::Confirming,
            MessageStatus::Delivered,
        ],
    );

    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default().with_max_attempts(10),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;

    assert!(result.is_ok(), "Should eventually deliver");
    let messages = result.unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].status.name.is_delivered());

    assert_eq!(
        fake_status.call_count(tx_hash),
        3,
        "Should have made 3 calls: inflight + confirming + delivered"
    );
    assert_eq!(
        fake_clock.sleep_count(),
        2,
        "Should have slept twice (once after each pending status)"
    );
}

#[tokio::test]
async fn test_not_indexed_then_delivered() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([3u8; 32]);

    fake_status.add_reply_sequence(
        tx_hash,
        vec![
            FakeReply::NotFound,
            FakeReply::NotFound,
            FakeReply::Messages(vec![message_with_status(MessageStatus::Delivered)]),
        ],
    );

    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default(),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;

    assert!(result.is_ok(), "Indexing lag should be retried");
    assert_eq!(fake_status.call_count(tx_hash), 3);
    assert_eq!(fake_clock.sleep_count(), 2);
}

#[tokio::test]
async fn test_rate_limit_sleeps_retry_after() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([4u8; 32]);

    fake_status.add_reply_sequence(
        tx_hash,
        vec![
            FakeReply::RateLimited(120),
            FakeReply::Messages(vec![message_with_status(MessageStatus::Delivered)]),
        ],
    );

    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default().with_poll_interval_secs(10),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;

    assert!(result.is_ok());
    assert_eq!(
        fake_clock.total_sleep_time(),
        Duration::from_secs(120),
        "Rate limit should sleep the server-provided backoff"
    );
}

#[tokio::test]
async fn test_failed_message_is_terminal() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([5u8; 32]);

    fake_status.add_status_sequence(
        tx_hash,
        vec![MessageStatus::Inflight, MessageStatus::Failed],
    );

    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default().with_max_attempts(10),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;

    assert!(
        matches!(result.unwrap_err(), BridgeError::DeliveryFailed { .. }),
        "Expected DeliveryFailed error"
    );
    assert_eq!(
        fake_status.call_count(tx_hash),
        2,
        "Should stop polling at the terminal status"
    );
}

#[tokio::test]
async fn test_blocked_message_is_terminal() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([6u8; 32]);

    fake_status.add_status_sequence(tx_hash, vec![MessageStatus::Blocked]);

    let tracker = create_tracker(fake_status, fake_clock, PollingConfig::default());

    let result = tracker.wait_for_delivery(tx_hash).await;
    assert!(matches!(
        result.unwrap_err(),
        BridgeError::DeliveryFailed { .. }
    ));
}

#[tokio::test]
async fn test_empty_response_is_treated_as_pending() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([7u8; 32]);

    fake_status.add_reply_sequence(
        tx_hash,
        vec![
            FakeReply::Messages(vec![]),
            FakeReply::Messages(vec![message_with_status(MessageStatus::Delivered)]),
        ],
    );

    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default(),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;

    assert!(result.is_ok(), "An empty page must not count as delivered");
    assert_eq!(fake_status.call_count(tx_hash), 2);
}

#[tokio::test]
async fn test_multiple_messages_all_must_deliver() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([8u8; 32]);

    fake_status.add_reply_sequence(
        tx_hash,
        vec![
            FakeReply::Messages(vec![
                message_with_status(MessageStatus::Delivered),
                message_with_status(MessageStatus::Inflight),
            ]),
            FakeReply::Messages(vec![
                message_with_status(MessageStatus::Delivered),
                message_with_status(MessageStatus::Delivered),
            ]),
        ],
    );

    let tracker = create_tracker(
        fake_status.clone(),
        fake_clock.clone(),
        PollingConfig::default(),
    );

    let messages = tracker.wait_for_delivery(tx_hash).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        fake_status.call_count(tx_hash),
        2,
        "Partial delivery should keep polling"
    );
}

#[tokio::test]
async fn test_unscripted_transaction_times_out_as_never_indexed() {
    let fake_status = FakeStatusProvider::new();
    let fake_clock = FakeClock::new();
    let tx_hash = FixedBytes::from([9u8; 32]);

    let tracker = create_tracker(
        fake_status,
        fake_clock.clone(),
        PollingConfig::default().with_max_attempts(3),
    );

    let result = tracker.wait_for_delivery(tx_hash).await;
    assert!(matches!(result.unwrap_err(), BridgeError::DeliveryTimeout));
    assert_eq!(fake_clock.sleep_count(), 3);
}
