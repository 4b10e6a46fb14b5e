//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Scan Types** - Result of a receipt extraction
//! - **Listing Types** - Stored receipts from the listing service
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// =============================================================================
// Scan Types
// =============================================================================

/// A single line item read off a receipt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub price: String,
}

/// Structured fields extracted from one receipt.
///
/// Returned by the extraction service, or filled in by the demo action.
/// Always replaced as a whole, never merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default, deserialize_with = "text_or_number")]
    pub person: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub total: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub merchant: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: String,
    /// Extraction confidence in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl ScanResult {
    /// Confidence as a rounded percentage, `0` when unknown.
    pub fn confidence_percent(&self) -> u8 {
        let ratio = self.confidence.unwrap_or(0.0).clamp(0.0, 1.0);
        (ratio * 100.0).round() as u8
    }
}

// =============================================================================
// Listing Types
// =============================================================================

/// One item of a stored receipt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A receipt previously stored by the listing service.
///
/// Read-only on the client: filtering and currency display are projections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: i64,
    /// Owner id, kept as text so numeric and string ids compare alike
    #[serde(default, deserialize_with = "text_or_number")]
    pub person_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub merchant: String,
    #[serde(default)]
    pub receipt_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub total_cad: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<RecordItem>,
}

impl ReceiptRecord {
    /// "First Last", without stray spaces when a part is missing.
    pub fn person_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Accept a JSON string, number or null where the UI only needs text.
///
/// The extraction service reports amounts as numbers while the UI contract
/// treats them as display strings.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Null(()) => String::new(),
    })
}

// =============================================================================
// Error Types
// =============================================================================

/// What the scan page shows for any failed submission.
pub const SCAN_FAILED_MESSAGE: &str = "Scan failed. Try a clearer photo or use Demo Result.";

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Selected file is at or over the upload limit.
    #[error("File too large. Please upload under {limit_mb}MB.")]
    FileTooLarge { size: u64, limit_mb: u64 },

    /// Scan requested without a selected file.
    #[error("Choose a receipt first (or use Demo Result).")]
    NoFileSelected,

    /// Request could not be built or sent.
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Result could not be serialized.
    #[error("Export error: {0}")]
    Export(String),

    /// A browser API call failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
