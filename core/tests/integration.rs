//! End-to-end list tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port in a background thread,
//! then drives the public `fetch` / `list_action` API over real HTTP. Canned
//! scenarios use `Fixture` variants; filtering scenarios use a seeded store.

use std::time::Duration;

use axum::{http::StatusCode, Router};
use mock_server::{Fixture, Item, Store};
use todo_list_core::{fetch, list_action, ErrorKind, ListConfig};

/// Serve `router` on a random local port and return its base URL.
fn spawn(router: Router) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::serve(listener, router).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A base URL whose port had a listener that is now closed.
fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn config(url: &str) -> ListConfig {
    ListConfig::new(url).timeout(Duration::from_secs(5))
}

#[test]
fn list_action_scenarios() {
    struct Case {
        name: &'static str,
        fixture: Fixture,
        expected: Result<&'static str, ErrorKind>,
    }

    let cases = [
        Case {
            name: "results",
            fixture: Fixture::ResultsMany,
            expected: Ok("- 1 Task 1\n- 2 Task 2\n"),
        },
        Case {
            name: "one result",
            fixture: Fixture::ResultsOne,
            expected: Ok("- 1 Task 1\n"),
        },
        Case {
            name: "no results",
            fixture: Fixture::NoResults,
            expected: Ok(""),
        },
        Case {
            name: "not found",
            fixture: Fixture::NotFound,
            expected: Err(ErrorKind::NotFound),
        },
        Case {
            name: "server error",
            fixture: Fixture::ServerError,
            expected: Err(ErrorKind::InvalidResponse),
        },
        Case {
            name: "plain text body",
            fixture: Fixture::Root,
            expected: Err(ErrorKind::Decode),
        },
        Case {
            name: "wrong shape",
            fixture: Fixture::Malformed,
            expected: Err(ErrorKind::Decode),
        },
    ];

    for case in cases {
        let url = spawn(mock_server::fixture_app(case.fixture));
        let mut out = Vec::new();
        let result = list_action(&mut out, &config(&url));

        match case.expected {
            Ok(expected) => {
                result.unwrap_or_else(|e| panic!("{}: unexpected error {e}", case.name));
                assert_eq!(String::from_utf8(out).unwrap(), expected, "{}", case.name);
            }
            Err(kind) => {
                let err = result.expect_err(case.name);
                assert_eq!(err.api_kind(), Some(kind), "{}: got {err}", case.name);
                assert!(out.is_empty(), "{}: wrote output on error", case.name);
            }
        }
    }
}

#[test]
fn closed_server_is_connection_error() {
    let err = fetch(&config(&closed_url())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
}

#[test]
fn server_error_keeps_status_and_body() {
    let url = spawn(mock_server::fixture_app(Fixture::ServerError));
    match fetch(&config(&url)).unwrap_err() {
        todo_list_core::ApiError::InvalidResponse { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn active_filter_is_applied_by_server() {
    let store = Store::with_items(vec![
        Item::pending("Task 1"),
        Item::completed("Task 2"),
        Item::pending("Task 3"),
    ]);
    let url = spawn(mock_server::app(store));

    let all = fetch(&config(&url)).unwrap();
    assert_eq!(all.len(), 3);

    let mut out = Vec::new();
    list_action(&mut out, &config(&url)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "  - 1 Task 1\nX - 2 Task 2\n  - 3 Task 3\n"
    );

    let mut out = Vec::new();
    list_action(&mut out, &config(&url).active(true)).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "- 1 Task 1\n- 2 Task 3\n");
}

#[test]
fn empty_active_selection_can_be_not_found() {
    let store = Store::with_items(vec![Item::completed("Task 1")]).not_found_when_empty();
    let url = spawn(mock_server::app(store));

    assert_eq!(fetch(&config(&url)).unwrap().len(), 1);
    let err = fetch(&config(&url).active(true)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn repeated_fetch_is_stable() {
    let url = spawn(mock_server::fixture_app(Fixture::ResultsMany));
    let first = fetch(&config(&url)).unwrap();
    let second = fetch(&config(&url)).unwrap();
    assert_eq!(first, second);
}

/// A router that answers every path with `status` and raw `body` bytes.
fn raw_app(status: StatusCode, body: Vec<u8>) -> Router {
    Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, body) }
    })
}

#[test]
fn non_utf8_success_body_is_decode_error() {
    let url = spawn(raw_app(StatusCode::OK, vec![0xff, 0xfe, b'{']));
    let err = fetch(&config(&url)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn non_utf8_error_body_keeps_status() {
    let url = spawn(raw_app(StatusCode::INTERNAL_SERVER_ERROR, vec![0xff, 0xfe, b'{']));
    match fetch(&config(&url)).unwrap_err() {
        todo_list_core::ApiError::InvalidResponse { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn large_list_is_read_in_full() {
    let item = r#"{"Task":"A fairly long task description to pad the body out","Done":false,"CreatedAt":"2019-10-28T08:23:38.310097076-04:00","CompletedAt":"0001-01-01T00:00:00Z"}"#;
    let count = 100_000;
    let mut body = String::from(r#"{"results":["#);
    for i in 0..count {
        if i > 0 {
            body.push(',');
        }
        body.push_str(item);
    }
    body.push_str(&format!(r#"],"date":1572265440,"total_results":{count}}}"#));
    assert!(body.len() > 12 * 1024 * 1024);

    let url = spawn(raw_app(StatusCode::OK, body.into_bytes()));
    let items = fetch(&config(&url)).unwrap();
    assert_eq!(items.len(), count);
}

#[test]
fn slow_server_hits_deadline() {
    let router = Router::new().fallback(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (StatusCode::OK, Fixture::ResultsOne.body())
    });
    let url = spawn(router);

    let config = ListConfig::new(&url).timeout(Duration::from_millis(200));
    let err = fetch(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
}
