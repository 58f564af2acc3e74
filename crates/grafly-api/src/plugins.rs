// Plugin listing

use tracing::debug;

use crate::client::GrafanaClient;
use crate::error::Error;
use crate::models::Plugin;

impl GrafanaClient {
    /// List installed plugins of one type (`datasource`, `panel`, `app`).
    ///
    /// `GET /api/plugins?type={plugin_type}`
    pub async fn plugins(&self, plugin_type: &str) -> Result<Vec<Plugin>, Error> {
        let mut url = self.url("api/plugins")?;
        url.query_pairs_mut().append_pair("type", plugin_type);
        debug!(plugin_type, "listing plugins");
        self.get(url).await
    }
}
