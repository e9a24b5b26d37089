#![allow(dead_code)]

pub mod fake_web_app;

pub use fake_web_app::{refused_url, FakeWebApp, Reply};

use std::time::Duration;

use calendar_event_sender::engine::transport::ReqwestTransport;

/// Real transport with short timeouts that ignores any proxy configured in the
/// environment, so requests reach the local fake.
pub fn local_transport(timeout: Duration) -> ReqwestTransport {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("build test client");
    ReqwestTransport::from_client(client, timeout, timeout)
}
