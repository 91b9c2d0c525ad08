/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportRequest from CLI arguments
/// - Loading and parsing the items file
/// - Resolving the requesting user
use crate::cli::CliArgs;
use log::debug;
use relato::types::{Item, ReportRequest, Role, User};
use std::fs;

/// Build a complete ReportRequest from CLI arguments
///
/// This resolves all inputs upfront, ensuring the engine receives a fully
/// validated, immutable request.
pub fn build_report_request(args: &CliArgs) -> Result<ReportRequest, String> {
    debug!("Building report request from CLI args");

    let user = resolve_user(args);
    debug!("Requesting user: {} ({})", user.name, user.role.as_str());

    let items = load_items(args)?;
    debug!("Loaded {} items from {}", items.len(), args.items.display());

    Ok(ReportRequest { format: args.format.clone(), user, items })
}

/// Resolve the requesting user from CLI arguments
///
/// Unknown role strings are kept (mapped to Role::Unknown) rather than
/// rejected; such a user gets an empty report body by policy.
fn resolve_user(args: &CliArgs) -> User {
    let role = Role::parse(&args.role);
    if role == Role::Unknown {
        debug!("Unrecognized role {:?}; user will see no items", args.role);
    }
    User { name: args.user.clone(), role }
}

/// Load and parse the items file (a JSON array)
fn load_items(args: &CliArgs) -> Result<Vec<Item>, String> {
    let raw = fs::read_to_string(&args.items)
        .map_err(|e| format!("Failed to read items file {}: {}", args.items.display(), e))?;

    serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse items file {}: {}", args.items.display(), e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
