//! Single-pass report orchestration.
//!
//! The engine walks the items exactly once: header, then one row per
//! visible item (accumulating the total alongside), then footer. It does
//! no I/O and never mutates its inputs.

use super::csv;
use super::html;
use super::policy;
use super::summary::RunSummary;
use super::types::ReportFormat;
use crate::types::{Item, User};

/// Output of one engine run: the report text plus the counters derived in
/// the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub text: String,
    pub summary: RunSummary,
}

/// Generate a report and its run summary.
///
/// The raw format string is parsed once; an unrecognized format contributes
/// nothing at any stage, so the text comes back empty and the total stays
/// zero. Items are walked in input order. The running total is accumulated
/// only when a row is actually rendered.
pub fn generate(report_type: &str, user: &User, items: &[Item]) -> RenderedReport {
    let mut out = String::new();
    let mut summary = RunSummary::default();

    if let Some(format) = ReportFormat::parse(report_type) {
        out.push_str(&header(format, user));

        for item in items {
            if !policy::visible_to(item, user) {
                summary.excluded += 1;
                continue;
            }

            let priority = policy::is_priority(item, user);
            out.push_str(&row(format, item, user, priority));
            summary.total += item.value;
            summary.included += 1;
            if priority {
                summary.priority_rows += 1;
            }
        }

        out.push_str(&footer(format, summary.total));
    }

    RenderedReport { text: out.trim().to_string(), summary }
}

/// Generate a report, returning only the text.
pub fn generate_report(report_type: &str, user: &User, items: &[Item]) -> String {
    generate(report_type, user, items).text
}

fn header(format: ReportFormat, user: &User) -> String {
    match format {
        ReportFormat::Csv => csv::header(),
        ReportFormat::Html => html::header(user),
    }
}

fn row(format: ReportFormat, item: &Item, user: &User, priority: bool) -> String {
    match format {
        ReportFormat::Csv => csv::row(item, user),
        ReportFormat::Html => html::row(item, priority),
    }
}

fn footer(format: ReportFormat, total: f64) -> String {
    match format {
        ReportFormat::Csv => csv::footer(total),
        ReportFormat::Html => html::footer(total),
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
