//! In-process todo API used for integration tests and local runs.
//!
//! `app` serves a mutable item store; `fixture_app` answers every request
//! with one canned response.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const ROOT_BODY: &str = "There's an API here";
pub const NOT_FOUND_BODY: &str = "404 - not found";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Done")]
    pub done: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "CompletedAt")]
    pub completed_at: DateTime<Utc>,
}

impl Item {
    pub fn pending(task: &str) -> Self {
        Self {
            task: task.to_string(),
            done: false,
            created_at: Utc::now(),
            completed_at: zero_time(),
        }
    }

    pub fn completed(task: &str) -> Self {
        let now = Utc::now();
        Self {
            task: task.to_string(),
            done: true,
            created_at: now,
            completed_at: now,
        }
    }
}

/// `0001-01-01T00:00:00Z`, sent as `CompletedAt` until an item is done.
fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(-62_135_596_800, 0).unwrap_or_default()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub results: Vec<Item>,
    pub date: i64,
    pub total_results: i64,
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    #[serde(default)]
    active: bool,
}

/// Items in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Store {
    items: Arc<RwLock<Vec<Item>>>,
    not_found_when_empty: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            not_found_when_empty: false,
        }
    }

    /// Answer 404 instead of an empty envelope when nothing matches.
    pub fn not_found_when_empty(mut self) -> Self {
        self.not_found_when_empty = true;
        self
    }

    pub async fn push(&self, item: Item) {
        self.items.write().await.push(item);
    }
}

pub fn app(store: Store) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/list", get(list))
        .with_state(store)
}

/// Canned responses, one per scenario the client has to classify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixture {
    ResultsMany,
    ResultsOne,
    NoResults,
    Root,
    NotFound,
    ServerError,
    Malformed,
}

impl Fixture {
    pub fn status(self) -> StatusCode {
        match self {
            Fixture::NotFound => StatusCode::NOT_FOUND,
            Fixture::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Fixture::ResultsMany => {
                r#"{
  "results": [
    {
      "Task": "Task 1",
      "Done": false,
      "CreatedAt": "2019-10-28T08:23:38.310097076-04:00",
      "CompletedAt": "0001-01-01T00:00:00Z"
    },
    {
      "Task": "Task 2",
      "Done": false,
      "CreatedAt": "2019-10-28T08:23:38.323447798-04:00",
      "CompletedAt": "0001-01-01T00:00:00Z"
    }
  ],
  "date": 1572265440,
  "total_results": 2
}"#
            }
            Fixture::ResultsOne => {
                r#"{
  "results": [
    {
      "Task": "Task 1",
      "Done": false,
      "CreatedAt": "2019-10-28T08:23:38.310097076-04:00",
      "CompletedAt": "0001-01-01T00:00:00Z"
    }
  ],
  "date": 1572265440,
  "total_results": 1
}"#
            }
            Fixture::NoResults => r#"{"results": [], "date": 1572265440, "total_results": 0}"#,
            Fixture::Root => ROOT_BODY,
            Fixture::NotFound => NOT_FOUND_BODY,
            Fixture::ServerError => "internal error",
            Fixture::Malformed => r#"{"results": "none", "date": 1572265440, "total_results": 0}"#,
        }
    }
}

/// A router that answers every path with `fixture`.
pub fn fixture_app(fixture: Fixture) -> Router {
    Router::new().fallback(move || async move { (fixture.status(), fixture.body()) })
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn root() -> &'static str {
    ROOT_BODY
}

async fn list(State(store): State<Store>, Query(query): Query<ListQuery>) -> Response {
    let items = store.items.read().await;
    let results: Vec<Item> = items
        .iter()
        .filter(|item| !query.active || !item.done)
        .cloned()
        .collect();
    tracing::debug!(active = query.active, count = results.len(), "serving list");

    if results.is_empty() && store.not_found_when_empty {
        return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
    }

    Json(ListResponse {
        total_results: results.len() as i64,
        date: Utc::now().timestamp(),
        results,
    })
    .into_response()
}
