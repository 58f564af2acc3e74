//! Template expansion and session handling between `grafly-api` and the CLI.
//!
//! - **[`template`]**: turns a terse TOML or JSON dashboard template into a
//!   complete [`Dashboard`](grafly_api::Dashboard): row and panel defaults are
//!   merged in, and every `metric` shorthand entry becomes a fully specified
//!   InfluxDB target.
//!
//! - **[`defaults`]**: the default values used by the expansion, as plain
//!   factory functions.
//!
//! - **[`Session`]**: credentials plus a [`GrafanaClient`](grafly_api::GrafanaClient),
//!   with `login()` and `upload_template()` on top of the raw endpoints.

pub mod config;
pub mod defaults;
pub mod error;
pub mod session;
pub mod template;

mod merge;

pub use config::{SessionConfig, TlsVerification};
pub use error::{CoreError, DecodeFailure};
pub use session::Session;
pub use template::{TemplateFormat, convert_template, expand, parse_template};

// Re-export the model so consumers need a single dependency.
pub use grafly_api::{
    Dashboard, DashboardResult, DataSource, DataSourcePlugin, Metric, Panel, Plugin, Row, Tag,
    Target, TimeRange,
};
