//! Scan page: upload card on the left, extracted fields on the right.

use leptos::*;
use leptos_meta::Title;

use crate::components::{ResultPanel, UploadSection};
use crate::config::AppConfig;
use crate::state::ScanSession;

#[component]
pub fn ScanPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let session = create_rw_signal(ScanSession::new(
        config.max_upload_bytes,
        config.person_id.clone(),
        config.default_person.clone(),
    ));

    // Release the preview and orphan any pending scan when the page goes away.
    on_cleanup(move || {
        session.try_update(|s| s.teardown());
    });

    let opened_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

    view! {
        <Title text="Scan Receipt"/>
        <div class="page">
            <div class="page-header">
                <div>
                    <div class="page-title">
                        <div class="logo-mark"></div>
                        <h1>"Scan Receipt"</h1>
                    </div>
                    <div class="page-subtitle">
                        "Upload → extract total/merchant/date → export JSON/CSV"
                    </div>
                </div>
                <div class="timestamp" title="Opened at">{opened_at}</div>
            </div>

            <div class="two-columns">
                <UploadSection
                    session=session
                    people=config.people.clone()
                    scan_url=config.scan_url.clone()
                    tick_ms=config.progress_tick_ms
                />
                <ResultPanel session=session/>
            </div>
        </div>
    }
}
