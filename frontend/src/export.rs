//! Export of a scan result as JSON or CSV.
//!
//! The CSV layout is a fixed key/value sheet followed by the line items:
//!
//! ```text
//! "person","Dimana"
//! "total","$10.00"
//! ...
//! "flags","Tip detected"
//! "",""
//! "items",""
//! "name","price"
//! "Milk","$4.00"
//! ```

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::types::{AppError, AppResult, ScanResult};

/// Download formats offered on the scan page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "receipt-result.json",
            ExportFormat::Csv => "receipt-result.csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv;charset=utf-8",
        }
    }

    pub fn render(self, result: &ScanResult) -> AppResult<String> {
        match self {
            ExportFormat::Json => to_json(result),
            ExportFormat::Csv => to_csv(result),
        }
    }
}

/// Pretty-printed JSON of the whole result.
pub fn to_json(result: &ScanResult) -> AppResult<String> {
    serde_json::to_string_pretty(result).map_err(|e| AppError::Export(e.to_string()))
}

/// Key/value CSV sheet, every field quoted.
pub fn to_csv(result: &ScanResult) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let confidence = result
        .confidence
        .map(|c| c.to_string())
        .unwrap_or_default();
    let flags = result.flags.join(" | ");

    let header: [(&str, &str); 6] = [
        ("person", result.person.as_str()),
        ("total", result.total.as_str()),
        ("merchant", result.merchant.as_str()),
        ("date", result.date.as_str()),
        ("confidence", confidence.as_str()),
        ("flags", flags.as_str()),
    ];
    for (key, value) in header {
        writer.write_record([key, value]).map_err(csv_error)?;
    }

    writer.write_record(["", ""]).map_err(csv_error)?;
    writer.write_record(["items", ""]).map_err(csv_error)?;
    writer.write_record(["name", "price"]).map_err(csv_error)?;
    for item in &result.items {
        writer
            .write_record([item.name.as_str(), item.price.as_str()])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::Export(err.to_string())
}
