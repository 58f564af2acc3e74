// Grafana dashboard and data source models
//
// Serde types mirroring the server's JSON schema. Every struct accepts
// partially populated documents (`#[serde(default)]`) because the same
// types back terse TOML templates and full server responses. Snake-case
// and singular aliases (`row`, `panel`, `metric`, ...) exist for TOML
// templates; JSON output always uses the server's camelCase names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Dashboard ────────────────────────────────────────────────────────

/// A complete dashboard document.
///
/// `id` serializes as `null` when unset, which the server treats as
/// "create new" on upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dashboard {
    pub id: Option<u64>,
    pub title: String,
    #[serde(alias = "original_title")]
    pub original_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(alias = "hide_controls")]
    pub hide_controls: bool,
    pub refresh: String,
    pub annotations: Annotation,
    #[serde(alias = "schema_version")]
    pub schema_version: u32,
    #[serde(alias = "shared_crosshair")]
    pub shared_crosshair: bool,
    pub style: String,
    #[serde(alias = "templates")]
    pub templating: Templating,
    pub tags: Vec<Value>,
    pub time: TimeRange,
    #[serde(alias = "row")]
    pub rows: Vec<Row>,
    pub version: u32,
    pub timezone: String,
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Pin the dashboard to an absolute time window (RFC 3339 bounds).
    pub fn set_time_frame(&mut self, from: DateTime<Utc>, to: DateTime<Utc>) {
        self.time = TimeRange {
            from: from.to_rfc3339(),
            to: to.to_rfc3339(),
        };
    }

    /// Iterate over every panel of every row.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.rows.iter().flat_map(|row| row.panels.iter())
    }
}

/// Time window shown by a dashboard. Both bounds accept relative
/// expressions (`now-24h`) or absolute timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    /// `true` when neither bound was set.
    pub fn is_unset(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    pub enable: bool,
    pub list: Vec<Value>,
}

// ── Templating ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templating {
    #[serde(alias = "template")]
    pub list: Vec<TemplateVariable>,
}

/// A dashboard template variable (`$host`, `$interval`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateVariable {
    #[serde(alias = "all_format")]
    pub all_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<TemplateCurrent>,
    pub datasource: String,
    #[serde(alias = "include_all")]
    pub include_all: bool,
    pub multi: bool,
    #[serde(alias = "multi_format")]
    pub multi_format: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<TemplateOption>,
    pub query: String,
    pub refresh: String,
    #[serde(rename = "refresh_on_load")]
    pub refresh_on_load: bool,
    pub regex: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateCurrent {
    pub tags: Vec<Value>,
    pub text: String,
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOption {
    pub selected: bool,
    pub text: String,
    pub value: String,
}

// ── Row / Panel ──────────────────────────────────────────────────────

/// A horizontal band of panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub collapse: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    pub height: String,
    #[serde(alias = "panel")]
    pub panels: Vec<Panel>,
    pub title: String,
}

impl Row {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }
}

/// A chart, text or single-stat component of a row.
///
/// `metrics` only exists in templates: it is read from TOML/JSON input
/// and never written back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Panel {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    pub error: bool,
    pub id: u32,
    pub mode: String,
    pub span: u32,
    pub style: Map<String, Value>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub fill: u32,
    pub stack: bool,
    #[serde(alias = "target")]
    pub targets: Vec<Target>,
    #[serde(skip_serializing, alias = "metric")]
    pub metrics: Vec<Metric>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        alias = "override",
        alias = "series_overrides"
    )]
    pub series_overrides: Vec<SeriesOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "page_size")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "String::is_empty", alias = "left_y_axis_label")]
    pub left_y_axis_label: String,
    #[serde(skip_serializing_if = "String::is_empty", alias = "right_y_axis_label")]
    pub right_y_axis_label: String,
    #[serde(rename = "datasource", skip_serializing_if = "Option::is_none")]
    pub datasource: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty", alias = "null_point_mode")]
    pub null_point_mode: String,
    #[serde(skip_serializing_if = "String::is_empty", alias = "value_name")]
    pub value_name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub lines: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub points: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointradius: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bars: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub percentage: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not", alias = "stepped_line")]
    pub stepped_line: bool,
    #[serde(skip_serializing_if = "Option::is_none", alias = "time_from")]
    pub time_from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "time_shift")]
    pub time_shift: Option<Value>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_target(&mut self, target: Target) {
        self.targets.push(target);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Legend {
    pub show: bool,
    pub values: bool,
    pub min: bool,
    pub max: bool,
    pub current: bool,
    pub total: bool,
    pub avg: bool,
    #[serde(alias = "align_as_table")]
    pub align_as_table: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tooltip {
    pub value_type: String,
}

/// Per-series display override, matched by series alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOverride {
    pub alias: String,
    pub stack: bool,
    pub fill: u32,
    pub transform: String,
}

impl SeriesOverride {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }
}

// ── Target ───────────────────────────────────────────────────────────

/// One query against the time-series store backing a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Target {
    pub alias: String,
    pub hide: bool,
    pub measurement: String,
    #[serde(alias = "group_by")]
    pub group_by: Vec<GroupBy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<Vec<Select>>,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "String::is_empty", alias = "ds_type")]
    pub ds_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub transform: String,
}

impl Target {
    /// Append a `key = value` filter. The first filter carries no condition.
    pub fn filter_by_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.push(Tag::new(key, value));
    }

    pub fn group_by_tag(&mut self, tag: impl Into<String>) {
        self.group_by.push(GroupBy::tag(tag));
    }

    pub fn group_by_time(&mut self, interval: impl Into<String>) {
        self.group_by.push(GroupBy::time(interval));
    }

    /// Keys of the tag filters, in query order.
    pub fn tag_keys(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.key.as_str()).collect()
    }
}

/// A tag filter predicate. `condition` chains it to the previous tag
/// (`AND`/`OR`), so order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub condition: String,
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            condition: String::new(),
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupBy {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub interval: String,
    pub params: Vec<String>,
}

impl GroupBy {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            kind: "tag".into(),
            interval: String::new(),
            params: vec![tag.into()],
        }
    }

    pub fn time(interval: impl Into<String>) -> Self {
        Self {
            kind: "time".into(),
            interval: interval.into(),
            params: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Select {
    #[serde(rename = "type")]
    pub kind: String,
    pub params: Vec<String>,
}

/// Template shorthand for one or more targets: a measurement, the field
/// names to match and the hosts to match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    #[serde(alias = "Measurement")]
    pub measurement: String,
    #[serde(alias = "Fields")]
    pub fields: Vec<String>,
    #[serde(alias = "Hosts")]
    pub hosts: Vec<String>,
    #[serde(alias = "Alias")]
    pub alias: Vec<String>,
}

// ── Dashboard API envelopes ──────────────────────────────────────────

/// Response of `GET /api/dashboards/db/{slug}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardResult {
    pub meta: DashboardMeta,
    #[serde(alias = "dashboard")]
    pub model: Dashboard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardMeta {
    pub created: String,
    pub expires: String,
    pub is_home: bool,
    pub is_snapshot: bool,
    pub is_starred: bool,
    pub slug: String,
}

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Serialize)]
pub struct DashboardUpload<'a> {
    pub dashboard: &'a Dashboard,
    pub overwrite: bool,
}

// ── Data sources ─────────────────────────────────────────────────────

/// A data source connection descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSource {
    #[serde(alias = "Id")]
    pub id: u64,
    pub org_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub access: String,
    pub url: String,
    pub password: String,
    pub user: String,
    pub database: String,
    pub basic_auth: bool,
    pub basic_auth_user: String,
    pub basic_auth_password: String,
    pub is_default: bool,
}

// ── Plugins ──────────────────────────────────────────────────────────

/// Entry of `GET /api/datasources/plugins`, keyed by plugin type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSourcePlugin {
    pub annotations: Annotation,
    pub module: String,
    pub name: String,
    #[serde(alias = "Partials")]
    pub partials: PluginPartial,
    pub plugin_type: String,
    pub service_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginPartial {
    pub annotations: String,
    pub config: String,
}

/// Entry of `GET /api/plugins`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plugin {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub enabled: bool,
    pub pinned: bool,
    pub info: PluginInfo,
    pub latest_version: String,
    pub has_update: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginInfo {
    pub author: PluginAuthor,
    pub description: String,
    pub links: Value,
    pub logos: PluginLogos,
    pub screenshots: Value,
    pub version: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginAuthor {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginLogos {
    pub small: String,
    pub large: String,
}
