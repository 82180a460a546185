//! ConnectionStatus value object - operational state of a subscription
//!
//! - `Active`: service is live
//! - `Inactive`: service is cut
//! - `Pending`: awaiting installation/activation (default for new records)

use serde::{Deserialize, Serialize};

/// Operational state of a subscriber's connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConnectionStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

impl ConnectionStatus {
    /// All statuses, in display order
    pub const ALL: [ConnectionStatus; 3] = [
        ConnectionStatus::Active,
        ConnectionStatus::Inactive,
        ConnectionStatus::Pending,
    ];

    pub fn is_active(&self) -> bool {
        matches!(self, ConnectionStatus::Active)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Active => write!(f, "Active"),
            ConnectionStatus::Inactive => write!(f, "Inactive"),
            ConnectionStatus::Pending => write!(f, "Pending"),
        }
    }
}

impl std::str::FromStr for ConnectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(ConnectionStatus::Active),
            "inactive" => Ok(ConnectionStatus::Inactive),
            "pending" => Ok(ConnectionStatus::Pending),
            other => Err(format!(
                "unknown status '{other}' - expected active, inactive, or pending"
            )),
        }
    }
}

/// List filter: a single status, or the "All" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ConnectionStatus),
}

impl StatusFilter {
    /// Whether a customer with `status` passes the filter
    pub fn matches(&self, status: ConnectionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}
