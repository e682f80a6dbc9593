//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================
// EXPENSE DTOs
// ============================================

/// Add expense request
///
/// All fields are optional at the wire level so that a missing field
/// produces the API's own 400 message rather than a serde rejection;
/// the handler validates presence.
#[derive(Debug, Default, Deserialize)]
pub struct AddExpenseRequest {
    /// Short title
    #[serde(default)]
    pub title: Option<String>,
    /// Amount spent; must be a positive number
    #[serde(default)]
    pub amount: Option<f64>,
    /// Category label
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text note
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date (ISO 8601, e.g. "2026-08-20")
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Static message response used by add and delete
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Number of stored records
    pub records: u64,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
