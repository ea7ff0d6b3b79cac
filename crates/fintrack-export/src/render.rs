use tera::{Context, Tera};

use fintrack_core::models::report::{PeriodRange, ReportSummary, ReportType};

use crate::error::ExportError;

/// Built-in document template: title, resolved period, then one line per
/// summary figure in the order the summary declares them.
const REPORT_TEMPLATE: &str = "\
{{ title }} Report

Period: {{ start_date }} - {{ end_date }}

Summary:
{% for row in rows %}{{ row.label }}: {{ row.value }}
{% endfor %}";

/// Render the plain-text body of a report document.
pub fn render_report(
    report_type: ReportType,
    period: PeriodRange,
    summary: &ReportSummary,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let rows: Vec<serde_json::Value> = summary
        .entries()
        .into_iter()
        .map(|(label, value)| serde_json::json!({ "label": label, "value": value.to_string() }))
        .collect();

    let mut context = Context::new();
    context.insert("title", report_type.title());
    context.insert("start_date", &period.start_date.to_string());
    context.insert("end_date", &period.end_date.to_string());
    context.insert("rows", &rows);

    let rendered = tera.render("report", &context)?;
    Ok(rendered)
}
