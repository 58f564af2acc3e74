// ── Merge-with-defaults ──
//
// One function per model type. A field keeps any explicit value; only
// zero values (empty string, 0, false, None) are filled from the defaults.
// Child collections (panels, targets, options) are never merged here.

use grafly_api::{Panel, Row, TemplateVariable};

fn fill_str(field: &mut String, default: &str) {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
    }
}

fn fill_u32(field: &mut u32, default: u32) {
    if *field == 0 {
        *field = default;
    }
}

fn fill_bool(field: &mut bool, default: bool) {
    *field |= default;
}

fn fill_opt<T: Clone>(field: &mut Option<T>, default: Option<&T>) {
    if field.is_none() {
        *field = default.cloned();
    }
}

pub(crate) fn row(row: &mut Row, defaults: &Row) {
    fill_bool(&mut row.collapse, defaults.collapse);
    fill_opt(&mut row.editable, defaults.editable.as_ref());
    fill_str(&mut row.height, &defaults.height);
    fill_str(&mut row.title, &defaults.title);
}

pub(crate) fn panel(panel: &mut Panel, defaults: &Panel) {
    fill_str(&mut panel.content, &defaults.content);
    fill_opt(&mut panel.editable, defaults.editable.as_ref());
    fill_bool(&mut panel.error, defaults.error);
    fill_u32(&mut panel.id, defaults.id);
    fill_str(&mut panel.mode, &defaults.mode);
    fill_u32(&mut panel.span, defaults.span);
    fill_str(&mut panel.title, &defaults.title);
    fill_str(&mut panel.kind, &defaults.kind);
    fill_u32(&mut panel.fill, defaults.fill);
    fill_bool(&mut panel.stack, defaults.stack);
    fill_opt(&mut panel.tooltip, defaults.tooltip.as_ref());
    fill_opt(&mut panel.page_size, defaults.page_size.as_ref());
    fill_opt(&mut panel.legend, defaults.legend.as_ref());
    fill_str(&mut panel.left_y_axis_label, &defaults.left_y_axis_label);
    fill_str(&mut panel.right_y_axis_label, &defaults.right_y_axis_label);
    fill_opt(&mut panel.datasource, defaults.datasource.as_ref());
    fill_str(&mut panel.null_point_mode, &defaults.null_point_mode);
    fill_str(&mut panel.value_name, &defaults.value_name);
    fill_bool(&mut panel.lines, defaults.lines);
    fill_opt(&mut panel.linewidth, defaults.linewidth.as_ref());
    fill_bool(&mut panel.points, defaults.points);
    fill_opt(&mut panel.pointradius, defaults.pointradius.as_ref());
    fill_bool(&mut panel.bars, defaults.bars);
    fill_bool(&mut panel.percentage, defaults.percentage);
    fill_bool(&mut panel.stepped_line, defaults.stepped_line);
    fill_opt(&mut panel.time_from, defaults.time_from.as_ref());
    fill_opt(&mut panel.time_shift, defaults.time_shift.as_ref());
}

pub(crate) fn template_variable(var: &mut TemplateVariable, defaults: &TemplateVariable) {
    fill_str(&mut var.all_format, &defaults.all_format);
    fill_opt(&mut var.current, defaults.current.as_ref());
    fill_str(&mut var.datasource, &defaults.datasource);
    fill_bool(&mut var.include_all, defaults.include_all);
    fill_bool(&mut var.multi, defaults.multi);
    fill_str(&mut var.multi_format, &defaults.multi_format);
    fill_str(&mut var.name, &defaults.name);
    fill_str(&mut var.query, &defaults.query);
    fill_str(&mut var.refresh, &defaults.refresh);
    fill_bool(&mut var.refresh_on_load, defaults.refresh_on_load);
    fill_str(&mut var.regex, &defaults.regex);
    fill_str(&mut var.kind, &defaults.kind);
}
