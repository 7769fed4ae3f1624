//! Wire types for the MedAssyst backend API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored consultation as returned by the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    pub id: String,

    /// Free-text symptom description the user submitted
    pub symptoms: String,

    /// Diagnosis text (markdown) from the upstream service
    pub diagnosis: String,

    pub created_at: DateTime<Utc>,

    /// Severity code 1-3 when the backend assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
}

/// Body for POST /api/consult
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisRequest {
    pub symptoms: String,

    /// Bypass any server-side demo shortcut and force a real upstream call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_demo: Option<bool>,
}

/// Response from POST /api/consult
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosisResponse {
    pub diagnosis: String,

    #[serde(default)]
    pub consultation_id: Option<i64>,

    #[serde(default)]
    pub severity: Option<u8>,
}

/// Response from the /api/health endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,
}

/// Reachability of the diagnosis pipeline as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Online,
    Degraded,
    Offline,
}

impl ServiceStatus {
    /// Parse the status string from /api/health
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online" => Some(ServiceStatus::Online),
            "degraded" => Some(ServiceStatus::Degraded),
            "offline" => Some(ServiceStatus::Offline),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceStatus::Online => "online",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Offline => "offline",
        };
        write!(f, "{}", s)
    }
}
