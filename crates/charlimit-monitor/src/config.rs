//! Monitor configuration

use serde::{Deserialize, Serialize};

/// Remaining characters at or below which the warning state shows
pub const DEFAULT_WARNING_THRESHOLD: u32 = 20;

/// Process-wide monitor defaults
///
/// The warning threshold here is read at registration time; changing it
/// later affects only subsequent registrations, never fields that
/// already captured it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Default warning threshold for fields registered without one
    pub warning_threshold: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
        }
    }
}
