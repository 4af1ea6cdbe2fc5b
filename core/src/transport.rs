//! The I/O seam between `RapportiveClient` and the network.
//!
//! `UreqTransport` is the blocking default. Tests substitute their own
//! implementation to record requests or script responses.

use tracing::{debug, warn};

use crate::error::{RapportiveError, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Executes one `HttpRequest`.
///
/// Implementations must return 4xx/5xx responses as `Ok(HttpResponse)` and
/// reserve `Err` for failures that produced no response at all.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request)
    }
}

/// Blocking transport over a shared `ureq::Agent`.
///
/// The agent pools connections and is safe to share across threads.
/// Timeouts are ureq's defaults.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(url = %request.url, "sending request");

        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|e| {
            warn!(error = %e, url = %request.url, "request failed");
            RapportiveError::transport(e)
        })?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(|e| {
            warn!(error = %e, status, "failed to read response body");
            RapportiveError::transport(e)
        })?;

        debug!(status, "received response");
        Ok(HttpResponse { status, body })
    }
}
