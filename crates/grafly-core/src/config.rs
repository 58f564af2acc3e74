// ── Runtime connection configuration ──
//
// Describes *how* to reach a Grafana server. Carries credential data and
// connection tuning but never touches disk: the CLI builds a
// `SessionConfig` from its profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for one authenticated session against one server.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server URL (e.g., `http://localhost:3000`).
    pub url: Url,
    pub user: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl SessionConfig {
    pub fn new(url: Url, user: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            user: user.into(),
            password,
            tls: TlsVerification::default(),
            timeout: grafly_api::transport::DEFAULT_TIMEOUT,
        }
    }
}
