// Grafana HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, JSON bodies and error
// unwrapping. Endpoint groups (data sources, dashboards, plugins, auth)
// are inherent methods in separate files so this module only deals with
// transport mechanics.

use std::sync::Arc;

use reqwest::Method;
use reqwest::cookie::{CookieStore, Jar};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

const USER_AGENT: &str = concat!("grafly/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the server alongside non-2xx statuses.
#[derive(serde::Deserialize)]
struct ServerMessage {
    #[serde(default)]
    message: String,
}

/// HTTP client for a single Grafana server.
///
/// Holds the cookie-backed session established by [`login`](Self::login).
/// Every call is one request; nothing is cached or retried.
pub struct GrafanaClient {
    http: reqwest::Client,
    base_url: Url,
    /// Session cookies; `None` for clients built around a caller's `reqwest::Client`.
    cookie_jar: Option<Arc<Jar>>,
}

impl GrafanaClient {
    /// Create a client with a fresh session cookie jar.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let jar = Arc::new(Jar::default());
        let builder = reqwest::Client::builder()
            .timeout(transport.timeout)
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&jar));
        let http = transport
            .tls
            .configure(builder)?
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url,
            cookie_jar: Some(jar),
        })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            cookie_jar: None,
        }
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The `Cookie` header value the session currently sends, if any.
    pub fn cookie_header(&self) -> Option<String> {
        let jar = self.cookie_jar.as_ref()?;
        let cookies = jar.cookies(&self.base_url)?;
        cookies.to_str().ok().map(String::from)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{path}`, keeping any path prefix of the base URL
    /// (servers mounted under a sub-path).
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}")).map_err(Error::InvalidUrl)
    }

    /// Build `{base}/{path}/{segment}` with `segment` percent-encoded.
    pub(crate) fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, Error> {
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let body = self.send(Method::GET, url, None::<&()>).await?;
        decode(&body)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let body = self.send(Method::POST, url, Some(body)).await?;
        decode(&body)
    }

    /// DELETE; the response body is discarded after the status check.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        self.send(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    /// Issue one JSON request and return the raw body of a 2xx response.
    pub(crate) async fn send<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<String, Error> {
        debug!("{method} {url}");

        let mut builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;
        trace!(%status, bytes = text.len(), "response received");

        if !status.is_success() {
            // Servers answer errors with `{"message": "..."}`; anything else
            // (HTML error pages, empty bodies) leaves the message blank.
            let message = serde_json::from_str::<ServerMessage>(&text)
                .map(|m| m.message)
                .unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}

/// Deserialize a response body, keeping a preview for diagnostics.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    // Empty success bodies decode as JSON `null` so `()` and
    // `serde_json::Value` targets still succeed.
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
    })
}
