//! Scripted in-memory transport for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pimate_common::web::Url;
use pimate_common::{HttpMethod, TransportError};

use super::{HttpResponse, Transport};

type Reply = Result<HttpResponse, TransportError>;

/// Replays queued replies in order, then repeats the fallback forever.
pub(crate) struct FakeTransport {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    delay: Duration,
    requests: Mutex<Vec<(HttpMethod, Url)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeTransport {
    pub(crate) fn always(reply: Reply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: reply,
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::always(Ok(HttpResponse::new(status, Vec::new())))
    }

    pub(crate) fn json(status: u16, body: &str) -> Self {
        Self::always(Ok(HttpResponse::new(status, body.as_bytes().to_vec())))
    }

    pub(crate) fn failing(error: TransportError) -> Self {
        Self::always(Err(error))
    }

    /// Queue a reply ahead of the fallback.
    pub(crate) fn then(self, reply: Reply) -> Self {
        self.script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(reply);
        self
    }

    pub(crate) fn then_json(self, status: u16, body: &str) -> Self {
        self.then(Ok(HttpResponse::new(status, body.as_bytes().to_vec())))
    }

    /// Every request takes `delay` of (tokio) time before replying.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn requests(&self) -> Vec<(HttpMethod, Url)> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests().len()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn next_reply(&self) -> Reply {
        self.script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Decrements the in-flight counter even when the request future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, method: HttpMethod, url: Url) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((method, url));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.next_reply()
    }
}
