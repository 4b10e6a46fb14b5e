use leptos::*;

#[component]
pub fn ProgressSection(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-label">
                <span>"Extracting fields…"</span>
                <span class="progress-value">{move || format!("{}%", percent.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", percent.get())
                ></div>
            </div>
        </div>
    }
}
