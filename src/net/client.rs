use crate::errors::FetchError;
use crate::net::json::{self, JsonDocument};

/// Blocking client that issues a single GET request against a fixed URL.
///
/// The URL is stored as-is and only parsed when a request is made, so an
/// unusable URL shows up as a transport error on the first fetch. Nothing is
/// kept between calls: every fetch builds its own transport and re-issues the
/// request.
///
/// Two surfaces are offered:
/// - [`fetch_body`](Self::fetch_body) / [`fetch_json`](Self::fetch_json) return
///   a `Result` so callers can inspect why a fetch failed.
/// - [`body`](Self::body) / [`json`](Self::json) print the failure to stderr
///   and return `None`.
#[derive(Debug, Clone)]
pub struct HttpGetClient {
    url: String,
}

impl HttpGetClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Loads the URL and returns the raw body bytes.
    ///
    /// Any status outside 2xx is an error. The body is returned exactly as
    /// received from the transport.
    pub fn fetch_body(&self) -> Result<Vec<u8>, FetchError> {
        log::debug!("GET {}", self.url);

        let client = reqwest::blocking::Client::builder().build()?;
        let res = client.get(self.url.as_str()).send().map_err(|e| {
            log::debug!("GET {} failed: {}", self.url, e);
            FetchError::Transport(e)
        })?;

        let status = res.status();
        if !status.is_success() {
            log::debug!("GET {} returned {}", self.url, status);
            return Err(FetchError::Status {
                url: res.url().to_string(),
                status,
            });
        }

        // Fetch body. We don't do streaming
        let body = res.bytes()?.to_vec();
        log::debug!("GET {} -> {} ({} bytes)", self.url, status, body.len());

        Ok(body)
    }

    /// Loads the URL and decodes the body as JSON.
    ///
    /// A transport failure is returned untouched; decoding is only attempted
    /// on a successful body.
    pub fn fetch_json(&self) -> Result<JsonDocument, FetchError> {
        let body = self.fetch_body()?;
        json::decode(&body).map_err(|e| {
            log::debug!("GET {}: cannot decode body: {}", self.url, e);
            FetchError::Decode(e)
        })
    }

    /// Like [`fetch_body`](Self::fetch_body), but reports failure as `None`
    /// after printing a diagnostic to stderr.
    pub fn body(&self) -> Option<Vec<u8>> {
        report(self.fetch_body())
    }

    /// Like [`fetch_json`](Self::fetch_json), but reports failure as `None`
    /// after printing a single diagnostic to stderr.
    pub fn json(&self) -> Option<JsonDocument> {
        report(self.fetch_json())
    }
}

fn report<T>(result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    }
}
