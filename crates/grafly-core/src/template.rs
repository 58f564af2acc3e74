// ── Template conversion ──
//
// A template is a dashboard document in TOML or JSON where most fields may
// be omitted and panels may carry `metric` shorthand entries. Conversion
// decodes the document, merges defaults into every row, panel and template
// variable, and turns each metric into an InfluxDB target.

use std::fmt;
use std::path::Path;

use grafly_api::{Dashboard, Metric, Panel, Tag, Target};
use tracing::debug;

use crate::defaults;
use crate::error::{CoreError, DecodeFailure};
use crate::merge;

/// Serializations accepted for template documents, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Toml,
    Json,
}

impl TemplateFormat {
    pub const ALL: [Self; 2] = [Self::Toml, Self::Json];

    /// Decode into a fresh dashboard; a failed attempt leaves nothing behind.
    fn decode(self, bytes: &[u8]) -> Result<Dashboard, String> {
        match self {
            Self::Toml => {
                let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
                toml::from_str(text).map_err(|e| e.to_string())
            }
            Self::Json => {
                let mut dashboard: Dashboard =
                    serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
                // Exported dashboards carry the server id of their origin.
                dashboard.id = None;
                Ok(dashboard)
            }
        }
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("TOML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

/// Read a template file and convert it into an upload-ready dashboard.
pub fn convert_template(path: impl AsRef<Path>) -> Result<Dashboard, CoreError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading template");
    let bytes = std::fs::read(path).map_err(|source| CoreError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dashboard = parse_template(&bytes)?;
    Ok(expand(dashboard))
}

/// Decode template bytes, trying each [`TemplateFormat`] in order.
///
/// The first decoder that succeeds wins. If all of them fail the error
/// lists every decoder's message. No defaults are applied here.
pub fn parse_template(bytes: &[u8]) -> Result<Dashboard, CoreError> {
    let mut failures = Vec::with_capacity(TemplateFormat::ALL.len());
    for format in TemplateFormat::ALL {
        match format.decode(bytes) {
            Ok(dashboard) => {
                debug!(%format, "template decoded");
                return Ok(dashboard);
            }
            Err(message) => {
                debug!(%format, %message, "template decoder failed");
                failures.push(DecodeFailure { format, message });
            }
        }
    }
    Err(CoreError::TemplateParse { failures })
}

/// Fill defaults and expand metric shorthand.
///
/// Deterministic and idempotent: a dashboard with no metrics left and
/// every default already present comes back unchanged.
pub fn expand(mut dashboard: Dashboard) -> Dashboard {
    dashboard.editable.get_or_insert(true);

    let var_defaults = defaults::template_variable();
    for var in &mut dashboard.templating.list {
        merge::template_variable(var, &var_defaults);
    }

    let row_defaults = defaults::row();
    let panel_defaults = defaults::panel();
    for row in &mut dashboard.rows {
        merge::row(row, &row_defaults);
        for panel in &mut row.panels {
            merge::panel(panel, &panel_defaults);
            expand_metrics(panel);
        }
    }

    if dashboard.time.is_unset() {
        dashboard.time = defaults::time_range();
    }
    dashboard
}

/// Move every metric of the panel into its target list.
fn expand_metrics(panel: &mut Panel) {
    let metrics = std::mem::take(&mut panel.metrics);
    if !metrics.is_empty() {
        debug!(panel = %panel.title, count = metrics.len(), "expanding metrics");
    }
    panel
        .targets
        .extend(metrics.iter().map(target_from_metric));
}

/// Build the target for one metric:
///
/// ```text
/// SELECT ... FROM <measurement>
///   WHERE host =~ /h1|h2/ AND name =~ /f1|f2/
///   GROUP BY name, host
/// ```
pub fn target_from_metric(metric: &Metric) -> Target {
    let hosts = metric.hosts.join("|");
    let fields = metric.fields.join("|");

    let mut target = defaults::target();
    target.measurement.clone_from(&metric.measurement);
    if !metric.alias.is_empty() {
        target.alias = metric.alias.join(" ");
    }
    target.tags = vec![
        Tag::new(defaults::HOST_TAG, format!("/{hosts}/")),
        Tag::new(defaults::NAME_TAG, format!("/{fields}/")).with_condition("AND"),
    ];
    target.group_by = defaults::name_host_group_by();
    target
}
