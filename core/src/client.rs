//! Request builder and response classifier for the list endpoint.
//!
//! # Design
//! `ListClient` holds only the normalized base URL and the active flag. The
//! list operation is split into `build_list`, which produces an
//! `HttpRequest`, and `parse_list`, which classifies an `HttpResponse`.
//! `fetch` joins the two around a single `Transport::execute` call.

use crate::config::ListConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::{Item, ListResponse};

/// Stateless client for `GET {root}/list`.
#[derive(Debug, Clone)]
pub struct ListClient {
    base_url: String,
    active: bool,
}

impl ListClient {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            base_url: config.api_root.trim_end_matches('/').to_string(),
            active: config.active,
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        let mut url = format!("{}/list", self.base_url);
        if self.active {
            url.push_str("?active=true");
        }
        HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Classify a response: 2xx decodes, 404 is `NotFound`, anything else is
    /// `InvalidResponse`. Item order is kept as sent.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        let envelope: ListResponse =
            serde_json::from_slice(&response.body).map_err(ApiError::Decode)?;
        Ok(envelope.results)
    }

    /// Perform exactly one request through `transport`.
    pub fn fetch<T: Transport>(&self, transport: &T) -> Result<Vec<Item>, ApiError> {
        let response = transport.execute(&self.build_list())?;
        self.parse_list(response)
    }
}

/// Fetch the list described by `config` over a fresh `ureq` transport.
pub fn fetch(config: &ListConfig) -> Result<Vec<Item>, ApiError> {
    let transport = UreqTransport::new(config.timeout);
    ListClient::new(config).fetch(&transport)
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::InvalidResponse {
            status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        }),
    }
}
