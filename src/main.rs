mod cli;
mod config;
mod ui;

use relato::report;
use std::process;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        process::exit(1);
    }

    // Resolve the report request (format, user, items)
    let request = match config::build_report_request(&args) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            process::exit(1);
        }
    };

    // Generate the report in a single pass
    let rendered = report::generate(&request.format, &request.user, &request.items);

    if !args.quiet {
        let summary = &rendered.summary;
        ui::status(&format!(
            "{} report for {}: {} rows ({} hidden, {} priority), total {}",
            request.format,
            request.user.name,
            summary.included,
            summary.excluded,
            summary.priority_rows,
            summary.total
        ));
    }

    // Write the report text
    match args.output {
        Some(ref path) => {
            if let Err(e) = report::write_report(path, &rendered.text) {
                ui::print_error(&format!("Failed to write report {}: {}", path.display(), e));
                process::exit(1);
            }
            if !args.quiet {
                ui::status(&format!("Report written to {}", path.display()));
            }
        }
        None => {
            println!("{}", rendered.text);
        }
    }

    // Optional JSON summary export
    if let Some(ref path) = args.summary_json {
        if let Err(e) = report::export_json_summary(path, &request, &rendered) {
            ui::print_error(&format!("Failed to write summary {}: {}", path.display(), e));
            process::exit(1);
        }
        if !args.quiet {
            ui::status(&format!("Summary written to {}", path.display()));
        }
    }
}
