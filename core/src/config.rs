//! Request parameters for one list invocation.

use std::time::Duration;

/// Parameters for a single fetch, built once by the caller and passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub api_root: String,
    pub active: bool,
    /// Whole-request deadline. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl ListConfig {
    pub fn new(api_root: &str) -> Self {
        Self {
            api_root: api_root.to_string(),
            active: false,
            timeout: None,
        }
    }

    /// Ask the server for incomplete items only.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
