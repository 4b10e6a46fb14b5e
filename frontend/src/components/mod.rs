//! UI Components for the Receipt Scan application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Landing page
//!
//! # Feature Components
//! - [`ScanPage`] - Scan view, owns the scan session
//! - [`UploadSection`] - Receipt upload with drag & drop
//! - [`ProgressSection`] - Scan progress indicator
//! - [`ResultPanel`] - Extracted fields and JSON/CSV download
//! - [`ReceiptsPage`] - Stored receipts with filter and currency toggle

mod header;
mod hero;
mod progress;
mod receipts;
mod result_panel;
mod scan_page;
mod upload;

pub use header::*;
pub use hero::*;
pub use progress::*;
pub use receipts::*;
pub use result_panel::*;
pub use scan_page::*;
pub use upload::*;
