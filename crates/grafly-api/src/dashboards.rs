// Dashboard endpoints
//
// Dashboards are addressed by slug (`/api/dashboards/db/{slug}`).
// Upload wraps the document in `{ dashboard, overwrite }`.

use tracing::{debug, info};

use crate::client::GrafanaClient;
use crate::error::Error;
use crate::models::{Dashboard, DashboardResult, DashboardUpload};

impl GrafanaClient {
    /// Fetch a dashboard and its metadata by slug. A 404 becomes
    /// [`Error::NotFound`].
    ///
    /// `GET /api/dashboards/db/{slug}`
    pub async fn get_dashboard(&self, slug: &str) -> Result<DashboardResult, Error> {
        let url = self.url_with_segment("api/dashboards/db", slug)?;
        debug!(slug, "fetching dashboard");
        self.get(url).await.map_err(|e| match e.status() {
            Some(404) => Error::NotFound {
                kind: "dashboard",
                name: slug.to_owned(),
            },
            _ => e,
        })
    }

    /// Create or replace a dashboard.
    ///
    /// `POST /api/dashboards/db` with `{"dashboard": ..., "overwrite": ...}`.
    /// With `overwrite = false` the server rejects a dashboard whose title
    /// already exists.
    pub async fn upload_dashboard(&self, dashboard: &Dashboard, overwrite: bool) -> Result<(), Error> {
        let url = self.url("api/dashboards/db")?;
        debug!(title = %dashboard.title, overwrite, "uploading dashboard");
        let body = DashboardUpload {
            dashboard,
            overwrite,
        };
        let _: serde_json::Value = self.post(url, &body).await?;
        info!(title = %dashboard.title, "dashboard uploaded");
        Ok(())
    }

    /// Validate a raw JSON dashboard document and upload it.
    ///
    /// The document is decoded into [`Dashboard`] first; a document that
    /// does not decode is rejected before any request is sent.
    pub async fn upload_dashboard_json(&self, dashboard: &str, overwrite: bool) -> Result<(), Error> {
        let parsed: Dashboard =
            serde_json::from_str(dashboard).map_err(|e| Error::InvalidDashboard {
                message: e.to_string(),
            })?;
        self.upload_dashboard(&parsed, overwrite).await
    }

    /// Delete a dashboard.
    ///
    /// Looks the dashboard up first and deletes it through the slug the
    /// server reports, so a missing dashboard surfaces as the lookup error.
    pub async fn delete_dashboard(&self, slug: &str) -> Result<(), Error> {
        let existing = self.get_dashboard(slug).await?;
        let slug = if existing.meta.slug.is_empty() {
            slug
        } else {
            existing.meta.slug.as_str()
        };
        let url = self.url_with_segment("api/dashboards/db", slug)?;
        debug!(slug, "deleting dashboard");
        self.delete(url).await?;
        info!(slug, "dashboard deleted");
        Ok(())
    }
}
