//! Receipt upload card with drag & drop support.
//!
//! Handles file selection, the scan request and its progress ticker.

use gloo_timers::callback::Interval;
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement, KeyboardEvent};

use crate::components::ProgressSection;
use crate::services::submit_receipt;
use crate::state::{random_step, ScanSession};

#[component]
pub fn UploadSection(
    session: RwSignal<ScanSession<File>>,
    people: Vec<String>,
    scan_url: String,
    tick_ms: u32,
) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    let select = move |file: Option<File>| {
        session.update(|s| match file {
            Some(file) => {
                let _ = s.select_file(file);
            }
            None => s.clear_file(),
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        select(input.files().and_then(|files| files.get(0)));
        // Allow picking the same file again.
        input.set_value("");
    };

    let open_picker = move || {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if file.is_some() {
            select(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            open_picker();
        }
    };

    let on_scan = move |_| {
        let Some(Ok((ticket, request))) = session.try_update(|s| s.begin_submit()) else {
            return;
        };

        let ticker = Interval::new(tick_ms, move || {
            let step = random_step(&mut rand::thread_rng());
            session.try_update(|s| s.tick(ticket, step));
        });

        let scan_url = scan_url.clone();
        spawn_local(async move {
            let outcome = submit_receipt(&scan_url, &request).await;
            // Stops the ticker whatever the outcome, even if the page is gone.
            drop(ticker);
            session.try_update(|s| s.settle(ticket, outcome));
        });
    };

    let is_loading = move || session.with(|s| s.is_loading());
    let has_file = move || session.with(|s| s.has_file());
    let preview_url = move || session.with(|s| s.preview_url().map(str::to_string));
    let error = move || session.with(|s| s.error().map(str::to_string));
    let percent = Signal::derive(move || session.with(|s| s.progress().percent()));

    view! {
        <div class="card upload-card">
            <div class="card-header">
                <h2>"Upload"</h2>
                <div class="card-controls">
                    <span class="control-label">"Person"</span>
                    <select
                        class="select"
                        prop:value=move || session.with(|s| s.person().to_string())
                        on:change=move |ev| {
                            let person = event_target_value(&ev);
                            session.update(|s| s.set_person(person));
                        }
                    >
                        {people
                            .into_iter()
                            .map(|person| view! { <option value=person.clone()>{person.clone()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn-soft" on:click=move |_| open_picker()>
                        "Choose file"
                    </button>
                    <input
                        type="file"
                        accept="image/*,.pdf"
                        style="display:none"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </div>
            </div>

            <div
                class="dropzone"
                role="button"
                tabindex="0"
                title="Drop a file here"
                on:drop=on_drop
                on:dragover=on_dragover
                on:click=move |_| open_picker()
                on:keydown=on_keydown
            >
                <div class="dropzone-title">"Upload receipt"</div>
                <div class="dropzone-hint">{move || session.with(|s| s.file_label())}</div>
            </div>

            {move || preview_url().map(|url| view! {
                <img class="receipt-preview" src=url alt="Receipt preview"/>
            })}

            <Show
                when=move || has_file() && preview_url().is_none()
                fallback=|| view! { }
            >
                <div class="file-note">
                    <b>"Selected: "</b>
                    {move || session.with(|s| s.draft().map(|d| d.file().name()).unwrap_or_default())}
                    <span class="muted">" (Preview available for images)"</span>
                </div>
            </Show>

            <div class="action-row">
                <button
                    class="btn btn-primary"
                    disabled=move || !has_file() || is_loading()
                    on:click=on_scan
                >
                    {move || if is_loading() { "Scanning…" } else { "Scan" }}
                </button>
                <button class="btn btn-ghost" on:click=move |_| session.update(|s| s.reset(true))>
                    "Reset"
                </button>
                <button class="btn btn-ghost" on:click=move |_| session.update(|s| s.load_demo())>
                    "Demo Result"
                </button>
            </div>

            <Show when=is_loading fallback=|| view! { }>
                <ProgressSection percent=percent/>
            </Show>

            {move || error().map(|message| view! {
                <div class="error-message">
                    <div><b>"Oops: "</b>{message}</div>
                    <button class="btn btn-small" on:click=move |_| session.update(|s| s.dismiss_error())>
                        "Dismiss"
                    </button>
                </div>
            })}
        </div>
    }
}
