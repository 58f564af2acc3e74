use thiserror::Error;

/// Top-level error type for the `grafly-api` crate.
///
/// Covers authentication, transport, server-reported API failures and
/// response decoding. `grafly-core` maps these into user-facing variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected by the server (wrong credentials, disabled user, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response. `message` is the server's `{"message": ...}` body,
    /// empty when the server sent none.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// A named resource does not exist on the server.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// A caller-supplied dashboard document does not match the schema.
    #[error("Dashboard in wrong format: {message}")]
    InvalidDashboard { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code, if this error came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. }) || self.status() == Some(404)
    }

    /// Returns `true` if the session is missing or was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. }) || self.status() == Some(401)
    }
}
