//! Page view-models.
//!
//! Plain Rust state machines behind the pages. They hold no DOM handles and
//! are driven by the components, which keeps them testable natively.
//!
//! - [`scan`] - File selection, submission and export on the scan page
//! - [`receipts`] - Filtering, currency display and row expansion on the results page
//! - [`progress`] - Cosmetic progress indicator

pub mod progress;
pub mod receipts;
pub mod scan;

pub use progress::*;
pub use receipts::*;
pub use scan::*;
