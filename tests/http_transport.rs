//! The real `reqwest` transport against a local fake web app.
//!
//! Covers status/body capture, JSON vs raw-text bodies, non-2xx replies and
//! the three transport failure classes (timeout, refused connection, bad
//! request).

mod common;

use std::time::Duration;

use calendar_event_sender::engine::dispatcher::dispatch;
use calendar_event_sender::engine::normalizer::normalize;
use calendar_event_sender::engine::probe::{probe, ProbeVerdict};
use calendar_event_sender::engine::transport::{ReqwestTransport, Transport};
use calendar_event_sender::error::TransportError;
use calendar_event_sender::model::submission_result::ResponseBody;
use common::{refused_url, FakeWebApp, Reply};
use serde_json::json;

fn quick_transport() -> ReqwestTransport {
    common::local_transport(Duration::from_millis(300))
}

#[test]
fn post_sends_json_with_content_type() {
    let app = FakeWebApp::start(vec![Reply::json(200, r#"{"ok":true}"#)]);
    let transport = quick_transport();

    let reply = transport
        .post_json(&app.url(), r#"{"title":"T"}"#.to_string())
        .unwrap();
    assert_eq!(reply.status_code, 200);
    assert_eq!(reply.body, r#"{"ok":true}"#);

    let requests = app.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/macros/exec");
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    assert_eq!(requests[0].body, r#"{"title":"T"}"#);
}

#[test]
fn non_json_and_error_statuses_are_still_results() {
    let app = FakeWebApp::start(vec![
        Reply::text(200, "<html>Event created</html>"),
        Reply::json(400, r#"{"error":"missing start"}"#),
    ]);
    let batch = normalize(json!([{"title": "A"}, {"title": "B"}])).unwrap();

    let results = dispatch(&quick_transport(), &app.url(), &batch);

    assert!(results[0].ok);
    assert_eq!(results[0].body, ResponseBody::Text("<html>Event created</html>".into()));

    assert!(!results[1].ok);
    assert_eq!(results[1].status_code, 400);
    assert_eq!(results[1].body, ResponseBody::Json(json!({"error": "missing start"})));
}

#[test]
fn slow_server_times_out() {
    let app = FakeWebApp::start(vec![Reply::Stall(Duration::from_secs(2))]);

    let err = quick_transport()
        .post_json(&app.url(), "{}".to_string())
        .unwrap_err();

    assert_eq!(err, TransportError::Timeout);
}

#[test]
fn nothing_listening_is_a_connection_error() {
    let err = quick_transport()
        .post_json(&refused_url(), "{}".to_string())
        .unwrap_err();

    assert_eq!(err, TransportError::Connection);
}

#[test]
fn malformed_url_is_a_request_error() {
    let err = quick_transport()
        .post_json("not a url", "{}".to_string())
        .unwrap_err();

    match err {
        TransportError::Request(detail) => assert!(!detail.is_empty()),
        other => panic!("expected request error, got {other:?}"),
    }
}

#[test]
fn probe_uses_get_and_collects_headers() {
    let app = FakeWebApp::start(vec![Reply::text(200, "Script function not found: doGet")]);

    let report = probe(&quick_transport(), &app.url()).unwrap();

    assert_eq!(app.requests()[0].method, "GET");
    assert_eq!(report.verdict(), ProbeVerdict::ReachableWithoutGetHandler);
    assert!(report
        .headers
        .iter()
        .any(|(k, v)| k == "content-type" && v.starts_with("text/html")));
}
