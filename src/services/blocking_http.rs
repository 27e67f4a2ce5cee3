//! Blocking JSON GET requests executed on Tokio's blocking worker pool.
//!
//! Tools describe a request with [`JsonGet`] and hand it to [`fetch_json`],
//! which moves it onto a worker thread, builds a blocking `reqwest` client
//! there, and returns the decoded body. Every failure (transport, timeout,
//! HTTP status, JSON decode, worker panic) is logged and collapsed to `None`.

use std::sync::Once;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Fixed timeout applied to every outbound tool request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static LEGACY_TLS_NOTICE: Once = Once::new();

/// A GET request that can be moved onto a worker thread.
#[derive(Debug, Clone)]
pub(crate) struct JsonGet {
    url: String,
    query: Vec<(&'static str, String)>,
    headers: Vec<(&'static str, &'static str)>,
    legacy_tls: bool,
}

impl JsonGet {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            legacy_tls: false,
        }
    }

    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Allow protocol versions down to TLS 1.0 for hosts that still require them.
    pub(crate) fn legacy_tls(mut self) -> Self {
        self.legacy_tls = true;
        self
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    fn send(self) -> Result<Value, reqwest::Error> {
        let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);
        if self.legacy_tls {
            LEGACY_TLS_NOTICE.call_once(|| {
                warn!(
                    url = %self.url,
                    "using relaxed TLS settings (minimum TLS 1.0) for a legacy upstream"
                );
            });
            builder = builder.min_tls_version(reqwest::tls::Version::TLS_1_0);
        }
        let client = builder.build()?;

        let mut request = client.get(&self.url).query(&self.query);
        for (name, value) in &self.headers {
            request = request.header(*name, *value);
        }

        request.send()?.error_for_status()?.json::<Value>()
    }
}

/// Run `request` on the blocking pool and decode its JSON body.
pub(crate) async fn fetch_json(request: JsonGet) -> Option<Value> {
    let url = request.url().to_string();
    debug!(%url, "dispatching request to blocking worker");

    match tokio::task::spawn_blocking(move || request.send()).await {
        Ok(Ok(body)) => Some(body),
        Ok(Err(err)) => {
            warn!(%url, error = %err, "upstream request failed");
            None
        }
        Err(err) => {
            warn!(%url, error = %err, "blocking worker did not complete");
            None
        }
    }
}
