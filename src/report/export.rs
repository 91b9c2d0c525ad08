//! Report output files: the rendered text and a JSON run summary.
//!
//! All file I/O of the report pipeline lives here; the engine itself only
//! produces strings.

use super::engine::RenderedReport;
use crate::types::ReportRequest;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the rendered report text to a file, byte-identical to the string
/// the engine returned.
pub fn write_report(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// Export the run summary as JSON.
///
/// Produces a small document with the request metadata, the row counters,
/// the report total, and a generation timestamp.
pub fn export_json_summary(
    path: &Path,
    request: &ReportRequest,
    rendered: &RenderedReport,
) -> std::io::Result<()> {
    use serde_json::json;

    let summary = &rendered.summary;
    let report = json!({
        "format": request.format,
        "user": {
            "name": request.user.name,
            "role": request.user.role.as_str(),
        },
        "items": request.items.len(),
        "included": summary.included,
        "excluded": summary.excluded,
        "priority_rows": summary.priority_rows,
        "total": summary.total,
        "generated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    });

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}
