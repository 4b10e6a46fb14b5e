//! Stored receipts table with person filter, currency toggle and
//! expandable item lists.

use leptos::*;
use leptos_meta::Title;

use crate::config::AppConfig;
use crate::services::fetch_receipts;
use crate::state::{CurrencyMode, ReceiptRow, ReceiptsView};

#[component]
pub fn ReceiptsPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let receipts = create_rw_signal(ReceiptsView::default());

    receipts.update(|v| v.begin_loading());
    let receipts_url = config.receipts_url;
    spawn_local(async move {
        let outcome = fetch_receipts(&receipts_url).await;
        receipts.try_update(|v| v.finish_loading(outcome));
    });

    view! {
        <Title text="Receipts"/>
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>"Receipts"</h1>
                    <div class="page-subtitle">{move || receipts.with(|v| v.summary())}</div>
                </div>
                <div class="card-controls">
                    <input
                        class="input"
                        type="text"
                        placeholder="Filter by person id"
                        prop:value=move || receipts.with(|v| v.person_filter().to_string())
                        on:input=move |ev| {
                            let filter = event_target_value(&ev);
                            receipts.update(|v| v.set_person_filter(filter));
                        }
                    />
                    <select
                        class="select"
                        prop:value=move || receipts.with(|v| v.currency().as_str())
                        on:change=move |ev| {
                            let mode = CurrencyMode::from_value(&event_target_value(&ev));
                            receipts.update(|v| v.set_currency(mode));
                        }
                    >
                        <option value="original">"Original currency"</option>
                        <option value="cad">"CAD"</option>
                    </select>
                </div>
            </div>

            <div class="card receipts-table">
                <div class="receipts-row receipts-head">
                    <div>"Person"</div>
                    <div>"Merchant"</div>
                    <div>"Date"</div>
                    <div>"Category"</div>
                    <div class="align-right">"Total"</div>
                </div>
                {move || {
                    receipts
                        .with(|v| v.rows())
                        .into_iter()
                        .map(|row| view! { <ReceiptLine row=row receipts=receipts/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ReceiptLine(row: ReceiptRow, receipts: RwSignal<ReceiptsView>) -> impl IntoView {
    let id = row.id;
    let toggle = move |_| receipts.update(|v| v.toggle_row(id));

    view! {
        <div class="receipt" class:expanded=row.expanded>
            <div class="receipts-row clickable" on:click=toggle>
                <div>
                    {if row.expanded { "▼ " } else { "▶ " }}
                    {row.person}
                    <span class="muted">" #" {row.person_id}</span>
                </div>
                <div>{row.merchant}</div>
                <div>{row.date}</div>
                <div>{row.category}</div>
                <div class="align-right strong">{row.total}</div>
            </div>

            {row.expanded.then(|| view! {
                <div class="receipt-items">
                    {if row.items.is_empty() {
                        view! { <div class="muted">"No line items"</div> }.into_view()
                    } else {
                        row.items.into_iter().map(|item| view! {
                            <div class="items-row">
                                <div>
                                    {item.name}
                                    {item.quantity.map(|q| view! { <span class="muted">" × " {q}</span> })}
                                </div>
                                <div class="align-right">{item.price}</div>
                            </div>
                        }).collect_view()
                    }}
                </div>
            })}
        </div>
    }
}
