// ── Session facade ──
//
// Owns the client and the credentials it logs in with. The raw endpoints
// stay reachable through `client()`; template upload lives here because it
// combines conversion with the upload call.

use std::path::Path;

use grafly_api::{Dashboard, GrafanaClient, TlsMode, TransportConfig};
use tracing::{debug, info};

use crate::config::{SessionConfig, TlsVerification};
use crate::error::CoreError;
use crate::template;

pub struct Session {
    config: SessionConfig,
    client: GrafanaClient,
}

impl Session {
    /// Build the HTTP client. No request is sent until [`login`](Self::login).
    pub fn new(config: SessionConfig) -> Result<Self, CoreError> {
        let tls = match &config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        let transport = TransportConfig::default()
            .with_tls(tls)
            .with_timeout(config.timeout);
        let client = GrafanaClient::new(config.url.clone(), &transport)?;
        Ok(Self { config, client })
    }

    /// Log in with the configured credentials, storing the session cookie.
    pub async fn login(&self) -> Result<(), CoreError> {
        debug!(url = %self.config.url, user = %self.config.user, "opening session");
        self.client
            .login(&self.config.user, &self.config.password)
            .await?;
        Ok(())
    }

    pub fn client(&self) -> &GrafanaClient {
        &self.client
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Convert a template file and upload the result.
    ///
    /// Returns the uploaded dashboard. Conversion errors abort before any
    /// request is made.
    pub async fn upload_template(
        &self,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<Dashboard, CoreError> {
        let dashboard = template::convert_template(path)?;
        self.client.upload_dashboard(&dashboard, overwrite).await?;
        info!(title = %dashboard.title, "template uploaded");
        Ok(dashboard)
    }
}
