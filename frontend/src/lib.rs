//! Receipt Scan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for scanning receipts through an extraction
//! service and browsing the receipts already stored.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /         Hero                                              │
//! │  /scan     ScanPage ── UploadSection + ResultPanel           │
//! │                        (ScanSession view-model)              │
//! │  /results  ReceiptsPage (ReceiptsView view-model)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints, limits and theme
//! - [`types`] - Scan results, stored receipts, errors
//! - [`state`] - Page view-models (pure Rust, natively testable)
//! - [`export`] - JSON/CSV rendering of a scan result
//! - [`object_url`] - Scoped object URLs and the file abstraction
//! - [`components`] - UI components
//! - [`services`] - HTTP calls and downloads

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod export;
pub mod object_url;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::{AppConfig, Theme};

// Types
pub use types::{
    // Scan
    ScanResult, LineItem,
    // Listing
    ReceiptRecord, RecordItem,
    // Errors
    AppError, AppResult, SCAN_FAILED_MESSAGE,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let theme_vars = config.theme.css_vars();

    provide_meta_context();
    provide_context(config);

    view! {
        <Router>
            <div class="app" style=theme_vars>
                <Header/>
                <main>
                    <Routes>
                        <Route path="/" view=Hero/>
                        <Route path="/scan" view=ScanPage/>
                        <Route path="/results" view=ReceiptsPage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Page not found"</h1>
            <A href="/" class="btn btn-ghost">"Back home"</A>
        </div>
    }
}
