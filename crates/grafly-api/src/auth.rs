// Session authentication
//
// `POST /login` sets the session cookie in the client's jar;
// subsequent requests carry it automatically.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::GrafanaClient;
use crate::error::Error;

impl GrafanaClient {
    /// Authenticate with username/password.
    ///
    /// On success the session cookie is stored in the client's cookie jar
    /// and used for all subsequent requests.
    pub async fn login(&self, user: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.url("login")?;
        debug!(user, "logging in at {}", url);

        let body = json!({
            "user": user,
            "email": "",
            "password": password.expose_secret(),
        });

        match self.send(reqwest::Method::POST, url, Some(&body)).await {
            Ok(_) => {
                debug!("login successful");
                Ok(())
            }
            Err(Error::Api { status, message }) => Err(Error::Authentication {
                message: if message.is_empty() {
                    format!("login failed (HTTP {status})")
                } else {
                    format!("login failed (HTTP {status}): {message}")
                },
            }),
            Err(e) => Err(e),
        }
    }
}
