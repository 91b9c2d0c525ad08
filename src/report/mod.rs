//! Report generation module - visibility policy and format rendering.
//!
//! This module turns a report request (format, user, items) into a single
//! output string:
//! - Deciding which items the requesting user may see
//! - Rendering the format-specific header, rows, and footer
//! - Accumulating the running total and per-run counters
//! - Writing the finished text and a JSON summary to disk
//!
//! Everything except `export` is pure string production; terminal output
//! and process exit codes are handled by the caller.
//!
//! # Module Organization
//!
//! - `types` - Rendering model (`ReportFormat`)
//! - `policy` - Per-item visibility and priority rules
//! - `csv` / `html` - Format-specific renderers
//! - `engine` - Single-pass orchestration
//! - `summary` - Run counters and totals
//! - `export` - Report text and JSON summary file output

mod csv;
mod engine;
mod export;
mod html;
mod policy;
mod summary;
mod types;

// Re-export the engine surface
pub use engine::{RenderedReport, generate, generate_report};

// Re-export policy predicates
pub use policy::{is_priority, visible_to};

// Re-export export functions
pub use export::{export_json_summary, write_report};

// Re-export rendering model types
pub use summary::RunSummary;
pub use types::ReportFormat;
