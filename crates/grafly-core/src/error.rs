// ── Core error types ──
//
// User-facing errors from grafly-core. Template failures carry the file
// and every decoder's message; transport failures are translated from
// `grafly_api::Error` into domain-appropriate variants.

use std::fmt::Write as _;
use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateFormat;

/// One decoder's failure while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub format: TemplateFormat,
    pub message: String,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Template errors ──────────────────────────────────────────────
    #[error("Cannot read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse template:{}", render_failures(.failures))]
    TemplateParse { failures: Vec<DecodeFailure> },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{kind} '{name}' not found")]
    NotFound { kind: String, name: String },

    #[error("Invalid dashboard: {message}")]
    InvalidDashboard { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },
}

fn render_failures(failures: &[DecodeFailure]) -> String {
    failures.iter().fold(String::new(), |mut out, failure| {
        let _ = write!(out, "\n{} error: {}", failure.format, failure.message.trim_end());
        out
    })
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<grafly_api::Error> for CoreError {
    fn from(err: grafly_api::Error) -> Self {
        match err {
            grafly_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            grafly_api::Error::Transport(ref e) if e.is_connect() || e.is_timeout() => {
                CoreError::ConnectionFailed {
                    url: e.url().map(ToString::to_string).unwrap_or_default(),
                    reason: e.to_string(),
                }
            }
            grafly_api::Error::Api {
                status: 401,
                message,
            } => CoreError::AuthenticationFailed {
                message: if message.is_empty() {
                    "session expired or invalid credentials".into()
                } else {
                    message
                },
            },
            grafly_api::Error::NotFound { kind, name } => CoreError::NotFound {
                kind: kind.into(),
                name,
            },
            grafly_api::Error::InvalidDashboard { message } => {
                CoreError::InvalidDashboard { message }
            }
            grafly_api::Error::Api { status, message } => CoreError::Api {
                message: if message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    message
                },
                status: Some(status),
            },
            other => CoreError::Api {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}
