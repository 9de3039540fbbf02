use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayBot {
    pub url: String,
    pub shards: u32,
    pub session_start_limit: SessionStartLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStartLimit {
    pub total: u32,
    pub remaining: u32,
    /// Milliseconds until `remaining` resets.
    pub reset_after: u64,
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: u32,
}

fn default_max_concurrency() -> u32 {
    1
}

/// Which status page feed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceWindow {
    Active,
    Upcoming,
}

impl MaintenanceWindow {
    pub fn endpoint(self) -> &'static str {
        match self {
            MaintenanceWindow::Active => super::links::SCHEDULED_MAINTENANCES_ACTIVE,
            MaintenanceWindow::Upcoming => super::links::SCHEDULED_MAINTENANCES_UPCOMING,
        }
    }

    /// Feed file under the scheduled-maintenances directory.
    pub fn file_name(self) -> &'static str {
        match self {
            MaintenanceWindow::Active => "active.json",
            MaintenanceWindow::Upcoming => "upcoming.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduledMaintenances {
    #[serde(default)]
    pub scheduled_maintenances: Vec<Maintenance>,
}

/// One statuspage incident. Timestamps are kept as the raw ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintenance {
    pub id: String,
    pub name: String,
    pub status: String,
    pub impact: String,
    pub shortlink: Option<String>,
    pub scheduled_for: Option<String>,
    pub scheduled_until: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
