//! Error types for the todo list client.
//!
//! # Design
//! `ApiError` keeps one variant per failure class so callers can branch on
//! `ApiError::kind()` instead of matching message text. `NotFound` stays
//! separate from `InvalidResponse` because a 404 is how the server reports an
//! empty selection, while any other non-2xx is unexpected. Transport and
//! decode failures keep their underlying cause as the error source.

use std::io;

/// Errors returned by the fetch path.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response: refused, unresolvable, timed out,
    /// or the body could not be read off the wire.
    #[error("failed to connect to the todo API")]
    Connection(#[source] ureq::Error),

    /// The server returned 404.
    #[error("no todo items found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("invalid response from the todo API: HTTP {status}: {body}")]
    InvalidResponse { status: u16, body: String },

    /// A 2xx body did not match the list envelope.
    #[error("failed to decode the list response")]
    Decode(#[source] serde_json::Error),
}

/// Comparable discriminant of an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Connection,
    NotFound,
    InvalidResponse,
    Decode,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Connection(_) => ErrorKind::Connection,
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            ApiError::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Errors returned by `list_action`: either the fetch failed or the sink
/// refused a write. Both carry the original error untouched.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Write(#[from] io::Error),
}

impl ListError {
    /// Kind of the underlying fetch error, if this is one.
    pub fn api_kind(&self) -> Option<ErrorKind> {
        match self {
            ListError::Api(e) => Some(e.kind()),
            ListError::Write(_) => None,
        }
    }
}
