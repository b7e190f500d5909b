//! Tabular views: per-day duty totals and the compliance report.

use crate::core::compliance::ComplianceReport;
use crate::core::summary::DutyTotals;
use crate::models::duty_status::DutyStatus;
use crate::models::log_response::ComplianceSummary;
use crate::utils::colors::{RESET, color_for_compliance, color_for_status};
use crate::utils::formatting::format_percent;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// Accent color for the letter grade
fn grade_accent(grade: &str) -> Colour {
    match grade {
        "A+" | "A" => Colour::Green,
        "B+" | "B" => Colour::Cyan,
        "C+" | "C" => Colour::Yellow,
        "D" => Colour::RGB(255, 153, 51),
        _ => Colour::Red,
    }
}

/// Duty-hour totals table for one day.
pub fn render_totals(totals: &DutyTotals, use_colors: bool) -> String {
    let mut table = Table::new(vec![
        Column {
            header: "STATUS".to_string(),
            width: 20,
        },
        Column {
            header: "TIME".to_string(),
            width: 9,
        },
        Column {
            header: "% OF DAY".to_string(),
            width: 9,
        },
    ]);

    for status in DutyStatus::all() {
        let name = if use_colors {
            format!("{}{}{}", color_for_status(status), status.ds_as_str(), RESET)
        } else {
            status.ds_as_str().to_string()
        };

        table.add_row(vec![
            name,
            mins2readable(totals.minutes_for(status), false),
            format_percent(totals.percent_of_day(status)),
        ]);
    }

    table.add_row(vec![
        "recorded total".to_string(),
        mins2readable(totals.recorded_minutes(), false),
        format_percent(crate::utils::percent_of(
            totals.recorded_minutes(),
            crate::utils::time::MINUTES_PER_DAY,
        )),
    ]);

    table.render()
}

/// Compliance report block: grade, status, violations.
pub fn render_compliance(
    report: &ComplianceReport,
    summary: &ComplianceSummary,
    use_colors: bool,
) -> String {
    let mut out = String::new();

    let status_str = if use_colors {
        format!(
            "{}{}{}",
            color_for_compliance(report.status),
            report.status.as_str(),
            RESET
        )
    } else {
        report.status.as_str().to_string()
    };

    let grade_str = if use_colors {
        grade_accent(report.grade).bold().paint(report.grade).to_string()
    } else {
        report.grade.to_string()
    };

    out.push_str(&format!(
        "Score: {:.1}  Grade: {}  Status: {}\n",
        report.score, grade_str, status_str
    ));
    out.push_str(&format!("Violations: {}\n", summary.violation_count));

    for v in &summary.violations {
        out.push_str(&format!("  - {}\n", v));
    }

    out
}
