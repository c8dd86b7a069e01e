//! Service Metadata
//!
//! `GET /health` and `GET /info`, shown in the header as API status.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ServiceInfo {
    /// Short label, e.g. "Wish Wall API v0.1.0"
    pub fn label(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}
