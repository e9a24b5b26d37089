use tracing::{error, info};

use crate::engine::transport::Transport;
use crate::error::TransportError;
use crate::i18n::Strings;

/// Outcome of a plain GET against the configured URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdict {
    Reachable,
    /// Answered 200 but complained about a missing `doGet`: the script only
    /// takes POST, which is fine.
    ReachableWithoutGetHandler,
    Failed(u16),
}

impl ProbeReport {
    pub fn verdict(&self) -> ProbeVerdict {
        match self.status_code {
            200 if self.body.contains("doGet") => ProbeVerdict::ReachableWithoutGetHandler,
            200 => ProbeVerdict::Reachable,
            other => ProbeVerdict::Failed(other),
        }
    }
}

pub fn probe(transport: &dyn Transport, url: &str) -> Result<ProbeReport, TransportError> {
    info!(url, "probing web app");

    match transport.get(url) {
        Ok(reply) => {
            let mut headers = reply.headers;
            headers.sort();

            info!(status = reply.status_code, "probe response status");
            info!(?headers, "probe response headers");
            info!(body = %reply.body, "probe response body");

            Ok(ProbeReport {
                status_code: reply.status_code,
                headers,
                body: reply.body,
            })
        }
        Err(err) => {
            error!(url, "probe failed: {err}");
            Err(err)
        }
    }
}

pub fn render_probe(report: &ProbeReport, strings: &Strings) -> String {
    let headers: serde_json::Map<String, serde_json::Value> = report
        .headers
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
        .collect();
    let headers = serde_json::to_string_pretty(&headers).unwrap_or_default();

    format!(
        "{}\nHTTP {}\n\n{}\n{}\n\n{}\n{}",
        strings.probe_title, report.status_code, strings.probe_headers, headers, strings.probe_body, report.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::transport::HttpReply;
    use crate::i18n::ENGLISH;

    struct FixedGet(Result<HttpReply, TransportError>);

    impl Transport for FixedGet {
        fn post_json(&self, _url: &str, _body: String) -> Result<HttpReply, TransportError> {
            unreachable!("probe never posts")
        }

        fn get(&self, _url: &str) -> Result<HttpReply, TransportError> {
            self.0.clone()
        }
    }

    fn report(status_code: u16, body: &str) -> ProbeReport {
        ProbeReport {
            status_code,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn verdicts() {
        assert_eq!(report(200, "hello").verdict(), ProbeVerdict::Reachable);
        assert_eq!(
            report(200, "Script function not found: doGet").verdict(),
            ProbeVerdict::ReachableWithoutGetHandler
        );
        assert_eq!(report(404, "doGet").verdict(), ProbeVerdict::Failed(404));
        assert_eq!(report(204, "").verdict(), ProbeVerdict::Failed(204));
    }

    #[test]
    fn headers_are_sorted_and_rendered_as_json() {
        let transport = FixedGet(Ok(HttpReply {
            status_code: 200,
            headers: vec![
                ("x-frame-options".into(), "DENY".into()),
                ("content-type".into(), "text/html".into()),
            ],
            body: "<p>hi</p>".into(),
        }));

        let report = probe(&transport, "https://hook.test").unwrap();
        assert_eq!(report.headers[0].0, "content-type");

        assert_eq!(
            render_probe(&report, &ENGLISH),
            "GET Request Result:\nHTTP 200\n\nHeaders:\n{\n  \"content-type\": \"text/html\",\n  \"x-frame-options\": \"DENY\"\n}\n\nBody:\n<p>hi</p>"
        );
    }

    #[test]
    fn errors_pass_through() {
        let transport = FixedGet(Err(TransportError::Connection));
        assert_eq!(probe(&transport, "http://nowhere.test"), Err(TransportError::Connection));
    }
}
