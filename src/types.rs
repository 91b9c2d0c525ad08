/// Core data structures for report generation
///
/// This module defines the primary data structures used throughout relato
/// for representing report line items, requesting users, and resolved
/// report requests.

/// A single line item in a report
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub value: f64,
}

/// The user a report is generated for
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

/// Role of the requesting user
///
/// Every role string maps to a variant; unrecognized roles become
/// `Unknown` and see no items (policy, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Map a raw role string to a Role. Matching is exact: anything other
    /// than "ADMIN" or "USER" is Unknown.
    pub fn parse(s: &str) -> Role {
        match s {
            "ADMIN" => Role::Admin,
            "USER" => Role::User,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Unknown => "UNKNOWN",
        }
    }
}

/// Fully resolved input for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    /// Raw report format string as supplied by the caller ("CSV", "HTML", ...)
    pub format: String,
    pub user: User,
    pub items: Vec<Item>,
}
