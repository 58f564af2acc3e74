// ── Template default values ──
//
// Pure factories for the values merged into template documents. Each call
// returns a fresh value; nothing here is shared or mutable.

use grafly_api::{GroupBy, Legend, Panel, Row, Target, TemplateVariable, TimeRange};

pub const ROW_HEIGHT: &str = "200px";
pub const PANEL_SPAN: u32 = 6;
pub const PANEL_TYPE: &str = "graph";
pub const NULL_POINT_MODE: &str = "connected";
pub const TARGET_ALIAS: &str = "$tag_host $tag_name";
pub const TARGET_DS_TYPE: &str = "influxdb";
pub const TIME_FROM: &str = "now-24h";
pub const TIME_TO: &str = "now";

/// Tag key matched against the metric's host list.
pub const HOST_TAG: &str = "host";
/// Tag key matched against the metric's field list.
pub const NAME_TAG: &str = "name";

pub fn row() -> Row {
    Row {
        height: ROW_HEIGHT.into(),
        editable: Some(true),
        ..Row::default()
    }
}

pub fn panel() -> Panel {
    Panel {
        span: PANEL_SPAN,
        kind: PANEL_TYPE.into(),
        editable: Some(true),
        fill: 0,
        legend: Some(legend()),
        null_point_mode: NULL_POINT_MODE.into(),
        ..Panel::default()
    }
}

pub fn legend() -> Legend {
    Legend {
        show: true,
        ..Legend::default()
    }
}

pub fn target() -> Target {
    Target {
        alias: TARGET_ALIAS.into(),
        ds_type: TARGET_DS_TYPE.into(),
        ..Target::default()
    }
}

pub fn time_range() -> TimeRange {
    TimeRange {
        from: TIME_FROM.into(),
        to: TIME_TO.into(),
    }
}

pub fn template_variable() -> TemplateVariable {
    TemplateVariable {
        kind: "query".into(),
        refresh: "1".into(),
        all_format: "regex values".into(),
        multi_format: "regex values".into(),
        ..TemplateVariable::default()
    }
}

/// Group-by clause of a target synthesized from a metric: series are split
/// by field name first, then by host.
pub fn name_host_group_by() -> Vec<GroupBy> {
    vec![GroupBy::tag(NAME_TAG), GroupBy::tag(HOST_TAG)]
}
