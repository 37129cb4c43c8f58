//! Client core for listing todo items from a remote todo API.
//!
//! # Overview
//! One invocation performs one blocking `GET {root}/list`, classifies the
//! response into a small error taxonomy, decodes the item envelope, and
//! renders the items as aligned text into a caller-supplied sink.
//!
//! # Design
//! - `ListClient` splits the operation into `build_list` and `parse_list`, with
//!   a `Transport` executing the round-trip in between. `UreqTransport` is the
//!   network-backed implementation.
//! - `ListConfig` is an explicit value passed in by the caller; there is no
//!   process-wide configuration.
//! - `Renderer` never performs I/O beyond writing to the sink it is given.
//! - The library never logs and never retries; errors are returned with their
//!   cause attached.

use std::io::Write;

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod types;

pub use client::{fetch, ListClient};
pub use config::ListConfig;
pub use error::{ApiError, ErrorKind, ListError};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use render::{Renderer, TabWriter};
pub use types::{Item, ListResponse};

/// Fetch the list described by `config` and print it to `out`.
///
/// A successful empty list prints nothing.
pub fn list_action<W: Write>(out: &mut W, config: &ListConfig) -> Result<(), ListError> {
    let items = fetch(config)?;
    Renderer::default().print(out, &items)?;
    Ok(())
}
