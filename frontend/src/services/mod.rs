//! Browser-side services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`scan`] - Receipt upload to the extraction service
//! - [`receipts`] - Stored receipt listing
//! - [`download`] - Saving exports through a temporary object URL

pub mod download;
pub mod receipts;
pub mod scan;

pub use download::*;
pub use receipts::*;
pub use scan::*;
