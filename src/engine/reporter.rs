use crate::i18n::Strings;
use crate::model::submission_result::BatchReport;

/// Render the batch summary shown in the response view.
///
/// Pure: the same report and table always give the same text.
pub fn render_report(report: &BatchReport, strings: &Strings) -> String {
    let mut lines = vec![
        format!("{}: {}", strings.report_total, report.total),
        format!("{}: {}", strings.report_success, report.succeeded),
        format!("{}: {}", strings.report_failures, report.failed),
        String::new(),
        strings.report_details.to_string(),
    ];

    for result in &report.results {
        let flag = if result.ok {
            strings.report_ok
        } else {
            strings.report_failed
        };

        lines.push(format!(
            "--- {} {} | HTTP {} | {}",
            strings.report_event, result.index, result.status_code, flag
        ));
        lines.push(result.body.display_text());
    }

    lines.join("\n")
}
