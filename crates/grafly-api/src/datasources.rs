// Data source endpoints

use tracing::{debug, info};

use crate::client::GrafanaClient;
use crate::error::Error;
use crate::models::{DataSource, DataSourcePlugin};

impl GrafanaClient {
    /// List all data sources visible to the session.
    ///
    /// `GET /api/datasources`
    pub async fn list_data_sources(&self) -> Result<Vec<DataSource>, Error> {
        let url = self.url("api/datasources")?;
        debug!("listing data sources");
        self.get(url).await
    }

    /// Find a data source by name.
    ///
    /// The server has no by-name lookup in this API generation, so this
    /// lists and filters. Returns [`Error::NotFound`] when no data source
    /// carries the name.
    pub async fn get_data_source(&self, name: &str) -> Result<DataSource, Error> {
        self.list_data_sources()
            .await?
            .into_iter()
            .find(|ds| ds.name == name)
            .ok_or_else(|| Error::NotFound {
                kind: "data source",
                name: name.to_owned(),
            })
    }

    /// Create a data source.
    ///
    /// `POST /api/datasources`
    pub async fn create_data_source(&self, ds: &DataSource) -> Result<(), Error> {
        let url = self.url("api/datasources")?;
        debug!(name = %ds.name, kind = %ds.kind, "creating data source");
        let _: serde_json::Value = self.post(url, ds).await?;
        info!(name = %ds.name, "data source created");
        Ok(())
    }

    /// Delete an existing data source, addressed by its numeric id.
    ///
    /// `DELETE /api/datasources/{id}`
    pub async fn delete_data_source(&self, ds: &DataSource) -> Result<(), Error> {
        let url = self.url(&format!("api/datasources/{}", ds.id))?;
        debug!(id = ds.id, name = %ds.name, "deleting data source");
        self.delete(url).await?;
        info!(name = %ds.name, "data source deleted");
        Ok(())
    }

    /// Installed data source plugins keyed by plugin type.
    ///
    /// `GET /api/datasources/plugins`
    pub async fn data_source_plugins(
        &self,
    ) -> Result<std::collections::BTreeMap<String, DataSourcePlugin>, Error> {
        let url = self.url("api/datasources/plugins")?;
        debug!("listing data source plugins");
        self.get(url).await
    }
}
