// grafly-api: Async Rust client for the Grafana HTTP API
//
// Cookie-session login, data source and dashboard CRUD, plugin listing,
// and the serde model mirroring the server's dashboard JSON schema.

pub mod client;
pub mod dashboards;
pub mod datasources;
pub mod error;
pub mod models;
pub mod plugins;
pub mod transport;

mod auth;

pub use client::GrafanaClient;
pub use error::Error;
pub use models::{
    Annotation, Dashboard, DashboardMeta, DashboardResult, DashboardUpload, DataSource,
    DataSourcePlugin, GroupBy, Legend, Metric, Panel, Plugin, Row, Select, SeriesOverride, Tag,
    Target, TemplateVariable, Templating, TimeRange, Tooltip,
};
pub use transport::{TlsMode, TransportConfig};
