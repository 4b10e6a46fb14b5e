//! Extracted fields of the current scan, with JSON/CSV download.

use leptos::*;
use web_sys::File;

use crate::export::ExportFormat;
use crate::services::download_export;
use crate::state::ScanSession;
use crate::types::ScanResult;

#[component]
pub fn ResultPanel(session: RwSignal<ScanSession<File>>) -> impl IntoView {
    let result = move || session.with(|s| s.result().cloned());
    let has_result = move || session.with(|s| s.result().is_some());
    let is_loading = move || session.with(|s| s.is_loading());

    let download = move |format: ExportFormat| {
        let Some(rendered) = session.with(|s| s.export(format)) else {
            return;
        };
        if let Err(e) = rendered.and_then(|contents| download_export(format, &contents)) {
            log::error!("Export to {} failed: {}", format.file_name(), e);
        }
    };

    view! {
        <div class="card result-card">
            <div class="card-header">
                <h2>"Results"</h2>
                <div class="card-controls">
                    <button
                        class="btn btn-ghost"
                        disabled=move || !has_result()
                        on:click=move |_| download(ExportFormat::Json)
                    >
                        "Download JSON"
                    </button>
                    <button
                        class="btn btn-ghost"
                        disabled=move || !has_result()
                        on:click=move |_| download(ExportFormat::Csv)
                    >
                        "Download CSV"
                    </button>
                </div>
            </div>

            <Show
                when=move || !has_result() && !is_loading()
                fallback=|| view! { }
            >
                <div class="empty-state">
                    <p>"Upload a receipt and click " <b>"Scan"</b> "."</p>
                    <ul>
                        <li>"Auto-extract merchant, date, and total"</li>
                        <li>"Assign spending to a person"</li>
                        <li>"Export results (JSON/CSV)"</li>
                    </ul>
                </div>
            </Show>

            {move || result().map(|result| view! { <ResultFields result=result/> })}
        </div>
    }
}

#[component]
fn ResultFields(result: ScanResult) -> impl IntoView {
    let percent = result.confidence_percent();

    view! {
        <div class="result-summary">
            <div class="field-grid">
                <Field label="Person" value=result.person/>
                <Field label="Total" value=result.total/>
                <Field label="Merchant" value=result.merchant/>
                <Field label="Date" value=result.date/>
            </div>

            <div class="confidence">
                <div class="field-label">"Confidence"</div>
                <div class="confidence-row">
                    <div class="confidence-value">{format!("{}%", percent)}</div>
                    <div class="progress-bar">
                        <div class="progress-fill" style=format!("width: {}%;", percent)></div>
                    </div>
                </div>
            </div>
        </div>

        {(!result.flags.is_empty()).then(|| view! {
            <div class="flags">
                <div class="field-label">"Flags"</div>
                <ul>
                    {result.flags.iter().map(|flag| view! { <li>{flag.clone()}</li> }).collect_view()}
                </ul>
            </div>
        })}

        {(!result.items.is_empty()).then(|| view! {
            <div class="line-items">
                <div class="field-label">"Line items"</div>
                <div class="items-table">
                    <div class="items-row items-head">
                        <div>"Item"</div>
                        <div class="align-right">"Price"</div>
                    </div>
                    {result.items.iter().map(|item| view! {
                        <div class="items-row">
                            <div>{item.name.clone()}</div>
                            <div class="align-right strong">{item.price.clone()}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        })}
    }
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <div class="field-label">{label}</div>
            <div class="field-value">{value}</div>
        </div>
    }
}
