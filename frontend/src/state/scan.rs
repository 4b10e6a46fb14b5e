//! Scan page view-model.
//!
//! Owns the receipt draft, the in-flight submission and its outcome:
//!
//! ```text
//!            select           begin_submit            settle(Ok)
//!   Idle ───────────▶ FileSelected ───────▶ Submitting ─────────▶ Succeeded
//!    ▲                     ▲                     │ settle(Err)
//!    │ reset               │ select              ▼
//!    └─────────────────────┴──────────────── Failed
//! ```
//!
//! Every submission gets a [`SubmissionTicket`]. Reset, a new selection, the
//! demo fill and teardown all move to a new generation, so a response that
//! arrives for an older ticket is dropped instead of overwriting newer state.

use crate::export::ExportFormat;
use crate::object_url::{ObjectUrl, ReceiptFile};
use crate::state::progress::Progress;
use crate::types::{AppError, AppResult, LineItem, ScanResult, SCAN_FAILED_MESSAGE};

/// Where the scan page currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// The selected file and, for images, its preview.
///
/// Dropping the draft releases the preview URL.
#[derive(Debug)]
pub struct ReceiptDraft<F> {
    file: F,
    preview: Option<ObjectUrl>,
}

impl<F: ReceiptFile> ReceiptDraft<F> {
    fn new(file: F) -> Self {
        let preview = if file.is_image() {
            file.create_preview()
        } else {
            None
        };
        Self { file, preview }
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(ObjectUrl::as_str)
    }
}

/// Identifies one submission. Stale tickets are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Multipart fields for one scan request.
#[derive(Clone, Debug)]
pub struct SubmissionRequest<F> {
    pub file: F,
    pub person_id: String,
    pub category: String,
}

/// State of one scan page instance.
#[derive(Debug)]
pub struct ScanSession<F> {
    max_upload_bytes: u64,
    person_id: String,
    default_person: String,
    person: String,
    draft: Option<ReceiptDraft<F>>,
    result: Option<ScanResult>,
    error: Option<String>,
    progress: Progress,
    phase: ScanPhase,
    generation: u64,
    in_flight: Option<SubmissionTicket>,
}

impl<F: ReceiptFile> ScanSession<F> {
    pub fn new(max_upload_bytes: u64, person_id: impl Into<String>, default_person: impl Into<String>) -> Self {
        let default_person = default_person.into();
        Self {
            max_upload_bytes,
            person_id: person_id.into(),
            person: default_person.clone(),
            default_person,
            draft: None,
            result: None,
            error: None,
            progress: Progress::default(),
            phase: ScanPhase::Idle,
            generation: 0,
            in_flight: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ScanPhase::Submitting
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn draft(&self) -> Option<&ReceiptDraft<F>> {
        self.draft.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.draft.is_some()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.draft.as_ref().and_then(ReceiptDraft::preview_url)
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// "name (N KB)" for the selected file, or the drop-zone prompt.
    pub fn file_label(&self) -> String {
        match &self.draft {
            Some(draft) => {
                let kb = draft.file.byte_size().div_ceil(1024);
                format!("{} ({} KB)", draft.file.file_name(), kb)
            }
            None => "Drag & drop an image/PDF here or click to upload".to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Take `file` as the new draft.
    ///
    /// Files at or over the limit are refused and leave the current draft in
    /// place; only the error changes.
    pub fn select_file(&mut self, file: F) -> AppResult<()> {
        let size = file.byte_size();
        if size >= self.max_upload_bytes {
            let err = AppError::FileTooLarge {
                size,
                limit_mb: self.max_upload_bytes / (1024 * 1024),
            };
            log::warn!("Rejected {} ({} bytes): {}", file.file_name(), size, err);
            self.error = Some(err.to_string());
            return Err(err);
        }

        log::info!("Selected {} ({} bytes, {})", file.file_name(), size, file.media_type());
        self.supersede();
        self.result = None;
        self.error = None;
        self.progress.reset();
        // Old draft (and its preview URL) goes before the new one is built.
        self.draft = None;
        self.draft = Some(ReceiptDraft::new(file));
        self.phase = ScanPhase::FileSelected;
        Ok(())
    }

    /// Forget the selected file, e.g. when the picker is cancelled.
    pub fn clear_file(&mut self) {
        self.supersede();
        self.draft = None;
        self.result = None;
        self.error = None;
        self.progress.reset();
        self.phase = ScanPhase::Idle;
    }

    /// Start a submission of the current draft.
    pub fn begin_submit(&mut self) -> AppResult<(SubmissionTicket, SubmissionRequest<F>)> {
        let Some(draft) = &self.draft else {
            let err = AppError::NoFileSelected;
            self.error = Some(err.to_string());
            return Err(err);
        };

        let request = SubmissionRequest {
            file: draft.file.clone(),
            person_id: self.person_id.clone(),
            category: self.person.clone(),
        };

        self.generation += 1;
        let ticket = SubmissionTicket(self.generation);
        self.in_flight = Some(ticket);
        self.result = None;
        self.error = None;
        self.progress.reset();
        self.phase = ScanPhase::Submitting;

        log::info!("Scanning {} for {}", draft.file.file_name(), self.person);
        Ok((ticket, request))
    }

    /// Advance the cosmetic progress. Returns `false` once `ticket` is no
    /// longer the live submission.
    pub fn tick(&mut self, ticket: SubmissionTicket, step: u8) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.progress.advance(step);
        true
    }

    /// Record the outcome of a submission. Returns `false` if it was stale.
    pub fn settle(&mut self, ticket: SubmissionTicket, outcome: AppResult<ScanResult>) -> bool {
        if self.in_flight != Some(ticket) {
            log::debug!("Discarding stale scan response {:?}", ticket);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                log::info!("Scan succeeded: {} {}", result.merchant, result.total);
                self.result = Some(result);
                self.error = None;
                self.progress.complete();
                self.phase = ScanPhase::Succeeded;
            }
            Err(e) => {
                log::warn!("Scan failed: {}", e);
                self.result = None;
                self.error = Some(SCAN_FAILED_MESSAGE.to_string());
                self.phase = ScanPhase::Failed;
            }
        }
        true
    }

    /// Show the canned example result. Needs no file and no network.
    pub fn load_demo(&mut self) {
        self.supersede();
        self.result = Some(demo_result(&self.person));
        self.error = None;
        self.phase = ScanPhase::Succeeded;
    }

    /// Back to [`ScanPhase::Idle`], optionally keeping the chosen person.
    pub fn reset(&mut self, keep_person: bool) {
        self.clear_file();
        if !keep_person {
            self.person = self.default_person.clone();
        }
    }

    pub fn set_person(&mut self, person: impl Into<String>) {
        self.person = person.into();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Render the current result, `None` when there is nothing to export.
    pub fn export(&self, format: ExportFormat) -> Option<AppResult<String>> {
        self.result.as_ref().map(|result| format.render(result))
    }

    /// Release everything the page owns. Late responses are ignored.
    pub fn teardown(&mut self) {
        self.supersede();
        self.draft = None;
    }

    fn supersede(&mut self) {
        if self.in_flight.take().is_some() {
            log::debug!("Superseding in-flight scan");
        }
        self.generation += 1;
    }
}

fn demo_result(person: &str) -> ScanResult {
    let item = |name: &str, price: &str| LineItem {
        name: name.to_string(),
        price: price.to_string(),
    };
    ScanResult {
        person: person.to_string(),
        total: "$42.13".to_string(),
        merchant: "Starbucks".to_string(),
        date: "2026-01-17".to_string(),
        confidence: Some(0.92),
        flags: vec!["Tip detected".to_string()],
        items: vec![
            item("Latte", "$6.45"),
            item("Sandwich", "$10.99"),
            item("Tip", "$3.00"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const LIMIT: u64 = 12 * 1024 * 1024;

    #[derive(Clone, Debug)]
    struct FakeFile {
        name: String,
        size: u64,
        media_type: String,
        released: Rc<RefCell<Vec<String>>>,
    }

    impl ReceiptFile for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }

        fn create_preview(&self) -> Option<ObjectUrl> {
            let released = self.released.clone();
            Some(ObjectUrl::with_release(format!("blob:{}", self.name), move |url| {
                released.borrow_mut().push(url.to_string())
            }))
        }
    }

    struct Fixture {
        released: Rc<RefCell<Vec<String>>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                released: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn file(&self, name: &str, size: u64, media_type: &str) -> FakeFile {
            FakeFile {
                name: name.to_string(),
                size,
                media_type: media_type.to_string(),
                released: self.released.clone(),
            }
        }

        fn image(&self, name: &str) -> FakeFile {
            self.file(name, 2048, "image/jpeg")
        }

        fn released(&self) -> Vec<String> {
            self.released.borrow().clone()
        }
    }

    fn session() -> ScanSession<FakeFile> {
        ScanSession::new(LIMIT, "6", "Rowan")
    }

    fn scanned(merchant: &str) -> ScanResult {
        ScanResult {
            merchant: merchant.to_string(),
            total: "$1.00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_file_clears_previous_result_and_error() {
        let fx = Fixture::new();
        let mut s = session();
        s.load_demo();
        s.dismiss_error();
        s.begin_submit().unwrap_err();
        assert!(s.error().is_some());

        s.select_file(fx.image("a.jpg")).unwrap();

        assert_eq!(s.phase(), ScanPhase::FileSelected);
        assert!(s.result().is_none());
        assert!(s.error().is_none());
        assert_eq!(s.preview_url(), Some("blob:a.jpg"));
        assert_eq!(s.file_label(), "a.jpg (2 KB)");
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let fx = Fixture::new();
        let mut s = session();

        let err = s.select_file(fx.file("big.png", LIMIT, "image/png")).unwrap_err();

        assert!(matches!(err, AppError::FileTooLarge { limit_mb: 12, .. }));
        assert_eq!(s.phase(), ScanPhase::Idle);
        assert!(s.draft().is_none());
        assert_eq!(s.error(), Some("File too large. Please upload under 12MB."));
        assert!(fx.released().is_empty());
    }

    #[test]
    fn test_oversized_file_keeps_existing_draft() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();

        s.select_file(fx.file("big.pdf", LIMIT + 1, "application/pdf")).unwrap_err();

        assert_eq!(s.phase(), ScanPhase::FileSelected);
        assert_eq!(s.preview_url(), Some("blob:a.jpg"));
        assert!(fx.released().is_empty());
    }

    #[test]
    fn test_new_selection_releases_old_preview_once() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        s.select_file(fx.image("b.jpg")).unwrap();

        assert_eq!(fx.released(), vec!["blob:a.jpg".to_string()]);
        assert_eq!(s.preview_url(), Some("blob:b.jpg"));

        s.reset(true);
        assert_eq!(fx.released(), vec!["blob:a.jpg".to_string(), "blob:b.jpg".to_string()]);

        s.reset(true);
        drop(s);
        assert_eq!(fx.released().len(), 2);
    }

    #[test]
    fn test_pdf_gets_no_preview() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.file("receipt.pdf", 1500, "application/pdf")).unwrap();

        assert!(s.has_file());
        assert_eq!(s.preview_url(), None);
        assert_eq!(s.file_label(), "receipt.pdf (2 KB)");

        s.select_file(fx.image("a.jpg")).unwrap();
        assert!(fx.released().is_empty());
    }

    #[test]
    fn test_teardown_releases_preview() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        let (ticket, _) = s.begin_submit().unwrap();

        s.teardown();
        assert_eq!(fx.released(), vec!["blob:a.jpg".to_string()]);
        assert!(!s.settle(ticket, Ok(scanned("Late"))));
        assert!(s.result().is_none());

        drop(s);
        assert_eq!(fx.released().len(), 1);
    }

    #[test]
    fn test_submit_without_file_is_refused() {
        let mut s = session();

        let err = s.begin_submit().unwrap_err();

        assert_eq!(err, AppError::NoFileSelected);
        assert_eq!(s.error(), Some("Choose a receipt first (or use Demo Result)."));
        assert_eq!(s.phase(), ScanPhase::Idle);
        assert!(!s.is_loading());
    }

    #[test]
    fn test_submission_request_fields() {
        let fx = Fixture::new();
        let mut s = session();
        s.set_person("Dimana");
        s.select_file(fx.image("a.jpg")).unwrap();

        let (_, request) = s.begin_submit().unwrap();

        assert_eq!(request.file.name, "a.jpg");
        assert_eq!(request.person_id, "6");
        assert_eq!(request.category, "Dimana");
        assert_eq!(s.phase(), ScanPhase::Submitting);
        assert!(s.is_loading());
    }

    #[test]
    fn test_successful_scan() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        let (ticket, _) = s.begin_submit().unwrap();
        assert!(s.tick(ticket, 10));
        assert_eq!(s.progress().percent(), 10);

        assert!(s.settle(ticket, Ok(scanned("IGA"))));

        assert_eq!(s.phase(), ScanPhase::Succeeded);
        assert_eq!(s.result().map(|r| r.merchant.as_str()), Some("IGA"));
        assert_eq!(s.progress().percent(), 100);
        assert!(!s.is_loading());
    }

    #[test]
    fn test_failed_scan_shows_generic_message_and_stops_ticks() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        let (ticket, _) = s.begin_submit().unwrap();
        s.tick(ticket, 5);

        let failure = AppError::Server {
            status: 500,
            body: "stack trace".into(),
        };
        assert!(s.settle(ticket, Err(failure)));

        assert_eq!(s.phase(), ScanPhase::Failed);
        assert_eq!(s.error(), Some(SCAN_FAILED_MESSAGE));
        assert!(s.result().is_none());
        assert!(!s.tick(ticket, 5));
        assert_eq!(s.progress().percent(), 5);
        // Draft survives a failure so the user can resubmit.
        assert!(s.has_file());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        let (first, _) = s.begin_submit().unwrap();
        let (second, _) = s.begin_submit().unwrap();

        assert!(!s.settle(first, Ok(scanned("Old"))));
        assert_eq!(s.phase(), ScanPhase::Submitting);
        assert!(!s.tick(first, 10));

        assert!(s.settle(second, Ok(scanned("New"))));
        assert_eq!(s.result().map(|r| r.merchant.as_str()), Some("New"));
    }

    #[test]
    fn test_new_selection_invalidates_in_flight_scan() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        let (ticket, _) = s.begin_submit().unwrap();

        s.select_file(fx.image("b.jpg")).unwrap();

        assert!(!s.settle(ticket, Err(AppError::Network("offline".into()))));
        assert_eq!(s.phase(), ScanPhase::FileSelected);
        assert!(s.error().is_none());
    }

    #[test]
    fn test_demo_fill_needs_no_file() {
        let mut s = session();
        s.set_person("Alex");
        s.begin_submit().unwrap_err();

        s.load_demo();

        let result = s.result().unwrap();
        assert_eq!(result.person, "Alex");
        assert_eq!(result.merchant, "Starbucks");
        assert_eq!(result.items.len(), 3);
        assert!(s.error().is_none());
        assert_eq!(s.phase(), ScanPhase::Succeeded);
    }

    #[test]
    fn test_demo_fill_supersedes_in_flight_scan() {
        let fx = Fixture::new();
        let mut s = session();
        s.select_file(fx.image("a.jpg")).unwrap();
        let (ticket, _) = s.begin_submit().unwrap();

        s.load_demo();

        assert!(!s.settle(ticket, Err(AppError::Network("late".into()))));
        assert_eq!(s.phase(), ScanPhase::Succeeded);
        assert!(!s.is_loading());
    }

    #[test]
    fn test_reset_person_handling() {
        let fx = Fixture::new();
        let mut s = session();
        s.set_person("Dimana");
        s.select_file(fx.image("a.jpg")).unwrap();
        s.load_demo();

        s.reset(true);
        assert_eq!(s.phase(), ScanPhase::Idle);
        assert_eq!(s.person(), "Dimana");
        assert!(s.result().is_none());
        assert!(s.draft().is_none());
        assert_eq!(s.progress().percent(), 0);

        s.reset(false);
        assert_eq!(s.person(), "Rowan");
    }

    #[test]
    fn test_export_requires_result() {
        let mut s = session();
        assert!(s.export(ExportFormat::Csv).is_none());

        s.load_demo();
        let csv = s.export(ExportFormat::Csv).unwrap().unwrap();
        assert!(csv.contains(r#""merchant","Starbucks""#));
        assert!(csv.contains(r#""Sandwich","$10.99""#));
    }

    #[test]
    fn test_file_label_without_file() {
        let s = session();
        assert_eq!(s.file_label(), "Drag & drop an image/PDF here or click to upload");
    }
}
