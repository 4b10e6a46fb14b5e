//! Application configuration.
//!
//! Compile-time defaults for the Receipt Scan frontend. The app root builds an
//! [`AppConfig`] from them and injects it through Leptos context, so pages
//! never read these constants directly.

/// Extraction service endpoint (multipart `POST`).
pub const SCAN_URL: &str = "http://127.0.0.1:8005/scan";

/// Receipt listing endpoint (`GET`, JSON array).
pub const RECEIPTS_URL: &str = "http://127.0.0.1:8000/receipts";

/// Maximum receipt size accepted for upload (in bytes).
///
/// 12 MiB limit.
pub const MAX_UPLOAD_BYTES: u64 = 12 * 1024 * 1024;

/// Interval between two cosmetic progress ticks.
pub const PROGRESS_TICK_MS: u32 = 250;

/// Smallest progress increment per tick.
pub const PROGRESS_STEP_MIN: u8 = 3;

/// Largest progress increment per tick.
pub const PROGRESS_STEP_MAX: u8 = 14;

/// Progress never passes this value until the response arrives.
pub const PROGRESS_CAP: u8 = 95;

/// Person preselected on the scan page.
pub const DEFAULT_PERSON: &str = "Rowan";

/// People a scanned receipt can be assigned to.
pub const PEOPLE: [&str; 4] = ["Rowan", "Dimana", "Alex", "Other"];

/// Identifier sent as `person_id` with every scan.
///
/// Placeholder until people are resolved against the employee directory.
pub const PLACEHOLDER_PERSON_ID: &str = "6";

/// Colour palette, rendered as CSS custom properties on the app root.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub primary_2: &'static str,
    pub soft: &'static str,
    pub danger_bg: &'static str,
    pub danger_border: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#F5F7FF",
            card: "#FFFFFF",
            border: "#E6E8F2",
            text: "#0B1020",
            muted: "#5B647A",
            primary: "#1E40FF",
            primary_2: "#1A35D6",
            soft: "#EEF2FF",
            danger_bg: "#FFF1F2",
            danger_border: "#FECACA",
        }
    }
}

impl Theme {
    /// Inline `style` value declaring every colour as a `--rs-*` variable.
    pub fn css_vars(&self) -> String {
        [
            ("bg", self.bg),
            ("card", self.card),
            ("border", self.border),
            ("text", self.text),
            ("muted", self.muted),
            ("primary", self.primary),
            ("primary-2", self.primary_2),
            ("soft", self.soft),
            ("danger-bg", self.danger_bg),
            ("danger-border", self.danger_border),
        ]
        .iter()
        .map(|(name, value)| format!("--rs-{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Runtime configuration shared by every page.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub scan_url: String,
    pub receipts_url: String,
    pub max_upload_bytes: u64,
    pub progress_tick_ms: u32,
    pub default_person: String,
    pub people: Vec<String>,
    pub person_id: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_url: SCAN_URL.to_string(),
            receipts_url: RECEIPTS_URL.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            progress_tick_ms: PROGRESS_TICK_MS,
            default_person: DEFAULT_PERSON.to_string(),
            people: PEOPLE.iter().map(|p| p.to_string()).collect(),
            person_id: PLACEHOLDER_PERSON_ID.to_string(),
            theme: Theme::default(),
        }
    }
}
