use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "relato")]
#[command(about = "Render role-filtered CSV and HTML reports from item data")]
#[command(version)]
pub struct CliArgs {
    /// Report format ("CSV" or "HTML"; anything else yields an empty report)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: String,

    /// Name of the requesting user (embedded in the report output)
    #[arg(long, short = 'u', value_name = "NAME")]
    pub user: String,

    /// Role of the requesting user ("ADMIN" or "USER"; unknown roles see no items)
    #[arg(long, short = 'r', value_name = "ROLE", default_value = "USER")]
    pub role: String,

    /// Path to the items file (JSON array of {id, name, value} objects)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub items: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write a JSON run summary (row counts and total) to this file
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Suppress status messages on stderr
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.user.trim().is_empty() {
            return Err("User name cannot be empty".to_string());
        }

        if !self.items.exists() {
            return Err(format!("Items file not found: {}", self.items.display()));
        }

        Ok(())
    }
}
