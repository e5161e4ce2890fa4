//! HTTP transport seam shared by the poller and the dispatcher.

mod http;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use pimate_common::web::Url;
use pimate_common::{HttpMethod, TransportError};

pub use http::ReqwestTransport;

/// A completed HTTP exchange. Any status counts; only the absence of a
/// response is a `TransportError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request. Never retries.
    async fn send(&self, method: HttpMethod, url: Url) -> Result<HttpResponse, TransportError>;
}
