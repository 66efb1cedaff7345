//! First-run seeding configuration.

use serde::{Deserialize, Serialize};

/// Settings for the first-run seed: a default user plus the base folder
/// structure (root and three top-level folders).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether seeding runs at startup. Seeding is idempotent; it only
    /// creates records when none exist.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Display name of the default user.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Email of the default user.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            admin_name: default_admin_name(),
            admin_email: default_admin_email(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_admin_name() -> String {
    "Admin".to_string()
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}
