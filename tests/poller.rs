//! Integration tests for the polling layer.
//!
//! Every test runs on a paused Tokio clock, so intervals and slow fetches
//! resolve instantly and deterministically.
//!
//! Run with:
//! ```bash
//! cargo test --test poller
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use coinboard::domain::signal::LatestSignals;
use coinboard::error::{HttpError, SdkError};
use coinboard::poll::{Feed, LoadState, OnFailure, PollScope};

const INTERVAL: Duration = Duration::from_secs(10);

fn server_error() -> SdkError {
    SdkError::Http(HttpError::Request {
        status: 500,
        body: "internal error".into(),
    })
}

/// A source that counts its calls and answers with the call number after
/// `delay`.
fn counting(
    scope: &mut PollScope,
    name: &str,
    delay: Duration,
) -> (Feed<usize>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let feed = scope.register(name, OnFailure::KeepLast, move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            sleep(delay).await;
            Ok::<_, SdkError>(n)
        }
    });
    (feed, calls)
}

#[tokio::test(start_paused = true)]
async fn teardown_mid_flight_discards_result() {
    let mut scope = PollScope::new("teardown", INTERVAL);
    let (feed, calls) = counting(&mut scope, "slow", Duration::from_secs(3));
    let mut handle = scope.start();

    sleep(Duration::from_secs(1)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1, "first fetch should be in flight");
    handle.stop();

    sleep(Duration::from_secs(60)).await;
    assert_eq!(feed.value(), None, "late result must not be applied");
    assert_eq!(feed.load_state(), LoadState::Loading);
    assert_eq!(calls.load(Ordering::SeqCst), 1, "no fetch after stop");
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_polling() {
    let mut scope = PollScope::new("drop", INTERVAL);
    let (mut feed, calls) = counting(&mut scope, "n", Duration::ZERO);
    let handle = scope.start();

    assert!(feed.changed().await);
    drop(handle);

    assert!(!feed.changed().await, "feed should close once the scope is gone");
    sleep(INTERVAL * 5).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn latest_signals_failure_resolves_to_empty_mapping() {
    let mut scope = PollScope::new("dashboard", Duration::from_secs(5));
    let (mut snapshot, _) = counting(&mut scope, "snapshot", Duration::ZERO);
    let mut latest = scope.register(
        "latest_signals",
        OnFailure::Replace(LatestSignals::default()),
        || async { Err::<LatestSignals, _>(server_error()) },
    );
    let _handle = scope.start();

    assert!(latest.changed().await);
    let state = latest.state();
    assert!(state.value.as_deref().is_some_and(LatestSignals::is_empty));
    assert_eq!(state.error.as_deref().and_then(SdkError::status), Some(500));
    assert_eq!(latest.load_state(), LoadState::Ready { stale: true });

    assert!(snapshot.changed().await);
    assert_eq!(snapshot.load_state(), LoadState::Ready { stale: false });
}

#[tokio::test(start_paused = true)]
async fn slow_source_does_not_block_others() {
    let mut scope = PollScope::new("market", INTERVAL);
    let (slow, slow_calls) = counting(&mut scope, "slow", Duration::from_secs(100));
    let (fast, fast_calls) = counting(&mut scope, "fast", Duration::ZERO);
    let _handle = scope.start();

    sleep(Duration::from_secs(25)).await;
    assert_eq!(fast_calls.load(Ordering::SeqCst), 3);
    assert_eq!(fast.value().as_deref(), Some(&3));
    assert_eq!(slow_calls.load(Ordering::SeqCst), 1, "in-flight source skips ticks");
    assert_eq!(slow.value(), None);

    sleep(Duration::from_secs(80)).await;
    assert_eq!(slow.value().as_deref(), Some(&1));
}

#[tokio::test(start_paused = true)]
async fn failure_keeps_last_good_value() {
    let mut scope = PollScope::new("dashboard", INTERVAL);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut feed = scope.register("snapshot", OnFailure::KeepLast, move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n == 2 {
                Err(server_error())
            } else {
                Ok(n)
            }
        }
    });
    let _handle = scope.start();

    assert!(feed.changed().await);
    assert_eq!(feed.value().as_deref(), Some(&1));
    let first_update = feed.state().updated_at;

    assert!(feed.changed().await);
    let state = feed.state();
    assert_eq!(state.value.as_deref(), Some(&1), "stale value stays visible");
    assert!(state.error.is_some());
    assert_eq!(state.updated_at, first_update);
    assert_eq!(feed.load_state(), LoadState::Ready { stale: true });

    assert!(feed.changed().await);
    assert_eq!(feed.value().as_deref(), Some(&3));
    assert_eq!(feed.load_state(), LoadState::Ready { stale: false });
}

#[tokio::test(start_paused = true)]
async fn first_load_failure_is_reported() {
    let mut scope = PollScope::new("dashboard", INTERVAL);
    let mut feed = scope.register("snapshot", OnFailure::KeepLast, || async {
        Err::<usize, _>(server_error())
    });
    let handle = scope.start();

    assert!(feed.changed().await);
    assert_eq!(feed.load_state(), LoadState::Failed);

    handle.refresh_now();
    assert!(feed.changed().await);
    assert_eq!(feed.load_state(), LoadState::Failed);
}

#[tokio::test(start_paused = true)]
async fn once_sources_fire_on_activation_only() {
    let mut scope = PollScope::new("market", INTERVAL);
    let (_, recurring) = counting(&mut scope, "ticker", Duration::ZERO);
    let once_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&once_calls);
    let details = scope.register_once("details", OnFailure::KeepLast, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, SdkError>("KRW-BTC") }
    });
    let _handle = scope.start();

    sleep(Duration::from_secs(35)).await;
    assert_eq!(recurring.load(Ordering::SeqCst), 4);
    assert_eq!(once_calls.load(Ordering::SeqCst), 1);
    assert_eq!(details.value().as_deref(), Some(&"KRW-BTC"));
}
