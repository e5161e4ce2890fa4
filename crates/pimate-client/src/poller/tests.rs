//! Tests for the polling loop, driven by paused tokio time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pimate_common::{HttpMethod, PollError, PollerError, SystemSnapshot, TransportError, ValidationError};
use tokio::sync::mpsc;

use super::*;
use crate::transport::fake::FakeTransport;

const GOOD: &str = r#"{"cpu_usage": 42, "memory_usage": 17, "disk_usage": 88}"#;
const NOT_A_NUMBER: &str = r#"{"cpu_usage": "n/a", "memory_usage": 17, "disk_usage": 88}"#;
const MISSING_DISK: &str = r#"{"cpu_usage": 42, "memory_usage": 17}"#;
const OUT_OF_RANGE: &str = r#"{"cpu_usage": 42, "memory_usage": 170, "disk_usage": 88}"#;

const INTERVAL: Duration = Duration::from_millis(100);

type Seen = mpsc::UnboundedReceiver<Result<SystemSnapshot, PollError>>;

fn base() -> BaseUrl {
    BaseUrl::parse("http://pi.test:5000").unwrap()
}

/// Start a poller whose callbacks forward into a channel.
fn start_recording(transport: &Arc<FakeTransport>) -> (PollerHandle, Seen) {
    let (tx, rx) = mpsc::unbounded_channel();
    let err_tx = tx.clone();
    let poller = MetricsPoller::new(transport.clone(), &base());
    let handle = poller
        .start(
            INTERVAL,
            move |snapshot| {
                let _ = tx.send(Ok(snapshot));
            },
            move |error| {
                let _ = err_tx.send(Err(error));
            },
        )
        .unwrap();
    (handle, rx)
}

fn drain(rx: &mut Seen) -> Vec<Result<SystemSnapshot, PollError>> {
    let mut seen = Vec::new();
    while let Ok(item) = rx.try_recv() {
        seen.push(item);
    }
    seen
}

fn snapshot(cpu: f64, mem: f64, disk: f64) -> SystemSnapshot {
    SystemSnapshot::new(cpu, mem, disk).unwrap()
}

#[tokio::test(start_paused = true)]
async fn publishes_exact_values_every_tick() {
    let transport = Arc::new(FakeTransport::json(200, GOOD));
    let (handle, mut rx) = start_recording(&transport);

    // Ticks at 0, 100, 200, 300.
    tokio::time::sleep(Duration::from_millis(350)).await;

    let seen = drain(&mut rx);
    assert_eq!(seen.len(), 4);
    for item in seen {
        assert_eq!(item, Ok(snapshot(42.0, 17.0, 88.0)));
    }
    assert_eq!(handle.latest(), Some(snapshot(42.0, 17.0, 88.0)));
}

#[tokio::test(start_paused = true)]
async fn requests_go_to_system_info_with_get() {
    let transport = Arc::new(FakeTransport::json(200, GOOD));
    let (_handle, _rx) = start_recording(&transport);

    tokio::time::sleep(Duration::from_millis(10)).await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, HttpMethod::Get);
    assert_eq!(requests[0].1.as_str(), "http://pi.test:5000/system_info");
}

#[tokio::test(start_paused = true)]
async fn bad_tick_keeps_last_good_snapshot() {
    let transport = Arc::new(FakeTransport::json(200, NOT_A_NUMBER).then_json(200, GOOD));
    let (handle, mut rx) = start_recording(&transport);

    tokio::time::sleep(Duration::from_millis(150)).await;

    let seen = drain(&mut rx);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], Ok(snapshot(42.0, 17.0, 88.0)));
    assert_eq!(
        seen[1],
        Err(PollError::Validation(ValidationError::NotANumber("cpu_usage")))
    );
    assert_eq!(handle.latest(), Some(snapshot(42.0, 17.0, 88.0)));
}

#[tokio::test(start_paused = true)]
async fn invalid_bodies_fire_one_error_per_tick() {
    for body in [NOT_A_NUMBER, MISSING_DISK, OUT_OF_RANGE, "not json"] {
        let transport = Arc::new(FakeTransport::json(200, body));
        let (handle, mut rx) = start_recording(&transport);

        // Ticks at 0, 100, 200.
        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.stop();

        let seen = drain(&mut rx);
        assert_eq!(seen.len(), 3, "body {body}");
        assert!(seen
            .iter()
            .all(|item| matches!(item, Err(PollError::Validation(_)))));
        assert_eq!(handle.latest(), None);
    }
}

#[tokio::test(start_paused = true)]
async fn non_200_is_a_status_error() {
    let transport = Arc::new(FakeTransport::json(500, GOOD));
    let (handle, mut rx) = start_recording(&transport);

    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(drain(&mut rx), vec![Err(PollError::Status(500))]);
    assert_eq!(handle.latest(), None);
}

#[tokio::test(start_paused = true)]
async fn transport_failure_is_reported_and_polling_continues() {
    let refused = TransportError::Connect("connection refused".into());
    let transport = Arc::new(FakeTransport::json(200, GOOD).then(Err(refused.clone())));
    let (handle, mut rx) = start_recording(&transport);

    tokio::time::sleep(Duration::from_millis(150)).await;

    let seen = drain(&mut rx);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], Err(PollError::Transport(refused)));
    assert_eq!(seen[1], Ok(snapshot(42.0, 17.0, 88.0)));
    assert!(handle.is_running());
}

#[tokio::test(start_paused = true)]
async fn slow_transport_never_overlaps_requests() {
    let transport =
        Arc::new(FakeTransport::json(200, GOOD).with_delay(Duration::from_millis(350)));
    let (_handle, mut rx) = start_recording(&transport);

    let elapsed = Duration::from_millis(1000);
    tokio::time::sleep(elapsed).await;

    let count = transport.request_count();
    assert_eq!(transport.max_in_flight(), 1);
    assert!(count as u128 <= elapsed.as_millis() / INTERVAL.as_millis() + 1);
    // Requests are strictly sequential: each takes 350ms.
    assert!(count <= 3, "got {count} requests");
    assert!(count >= 2);
    assert!(!drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn stop_discards_in_flight_response() {
    let transport =
        Arc::new(FakeTransport::json(200, GOOD).with_delay(Duration::from_millis(300)));
    let (handle, mut rx) = start_recording(&transport);

    // First request is now in flight.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(transport.request_count(), 1);

    handle.stop();
    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert!(drain(&mut rx).is_empty());
    assert_eq!(transport.request_count(), 1);
    assert!(!handle.is_running());
    assert_eq!(handle.latest(), None);
}

#[tokio::test(start_paused = true)]
async fn stop_halts_further_ticks_and_is_idempotent() {
    let transport = Arc::new(FakeTransport::json(200, GOOD));
    let (handle, mut rx) = start_recording(&transport);

    tokio::time::sleep(Duration::from_millis(150)).await;
    handle.stop();
    handle.stop();
    let before = drain(&mut rx).len();
    assert_eq!(before, 2);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(drain(&mut rx).is_empty());
    assert_eq!(transport.request_count(), 2);
    // The last good value survives stop.
    assert_eq!(handle.latest(), Some(snapshot(42.0, 17.0, 88.0)));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_polling() {
    let transport = Arc::new(FakeTransport::json(200, GOOD));
    let (handle, mut rx) = start_recording(&transport);

    tokio::time::sleep(Duration::from_millis(10)).await;
    drop(handle);
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(drain(&mut rx).len(), 1);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn stop_from_inside_callback() {
    let transport = Arc::new(FakeTransport::json(200, GOOD));
    let slot: Arc<Mutex<Option<PollerHandle>>> = Arc::new(Mutex::new(None));
    let calls = Arc::new(AtomicUsize::new(0));

    let poller = MetricsPoller::new(transport.clone(), &base());
    let handle = {
        let slot = Arc::clone(&slot);
        let calls = Arc::clone(&calls);
        poller
            .start(
                INTERVAL,
                move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if let Some(handle) = slot.lock().unwrap().as_ref() {
                        handle.stop();
                    }
                },
                |_| {},
            )
            .unwrap()
    };
    *slot.lock().unwrap() = Some(handle);

    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(transport.request_count(), 1);
    let guard = slot.lock().unwrap();
    assert!(!guard.as_ref().unwrap().is_running());
}

#[test]
fn zero_interval_is_rejected() {
    let transport = Arc::new(FakeTransport::status(200));
    let poller = MetricsPoller::new(transport.clone(), &base());
    let result = poller.start(Duration::ZERO, |_| {}, |_| {});
    assert!(matches!(result, Err(PollerError::InvalidInterval)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn poll_once_classifies_without_timer() {
    let poller = MetricsPoller::new(Arc::new(FakeTransport::json(200, GOOD)), &base());
    assert_eq!(poller.poll_once().await, Ok(snapshot(42.0, 17.0, 88.0)));

    let poller = MetricsPoller::new(
        Arc::new(FakeTransport::failing(TransportError::Timeout("10s".into()))),
        &base(),
    );
    assert!(matches!(
        poller.poll_once().await,
        Err(PollError::Transport(TransportError::Timeout(_)))
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stop_from_another_thread_waits_for_running_callback() {
    let transport = Arc::new(FakeTransport::json(200, GOOD));
    let (entered_tx, entered_rx) = std::sync::mpsc::channel();
    let calls = Arc::new(AtomicUsize::new(0));
    let finished = Arc::new(AtomicUsize::new(0));

    let poller = MetricsPoller::new(transport, &base());
    let handle = {
        let calls = Arc::clone(&calls);
        let finished = Arc::clone(&finished);
        poller
            .start(
                Duration::from_millis(10),
                move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let _ = entered_tx.send(());
                    std::thread::sleep(Duration::from_millis(100));
                    finished.fetch_add(1, Ordering::SeqCst);
                },
                |_| {},
            )
            .unwrap()
    };

    let (handle, finished_at_stop) = tokio::task::spawn_blocking({
        let finished = Arc::clone(&finished);
        move || {
            entered_rx.recv().unwrap();
            handle.stop();
            let done = finished.load(Ordering::SeqCst);
            (handle, done)
        }
    })
    .await
    .unwrap();

    // The callback that was running had completed by the time stop returned.
    assert_eq!(finished_at_stop, 1);
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!handle.is_running());
}
