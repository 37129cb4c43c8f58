//! HTTP transport for the list endpoint.
//!
//! # Design
//! Requests and responses are plain data. `ListClient` builds an
//! `HttpRequest` and parses an `HttpResponse`; a `Transport` sits between the
//! two and is the only place that touches the network. Status codes are never
//! errors at this layer: every response the server sends comes back as data so
//! the client owns status interpretation.

use std::time::Duration;

use crate::error::ApiError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// A response described as plain data. The body is kept as raw bytes; text
/// decoding is the client's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes one request. Implementations must not retry.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent. Only failures to exchange
/// bytes with the server become `ApiError::Connection`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds the whole request, including reading the body.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(ApiError::Connection)?;
        let status = response.status().as_u16();
        // No size cap: the whole list has to arrive before anything is printed.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(ApiError::Connection)?;

        Ok(HttpResponse { status, body })
    }
}
