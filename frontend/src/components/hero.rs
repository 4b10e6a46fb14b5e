//! Landing page

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <Title text="Receipt Scan"/>
        <div class="hero">
            <div class="hero-text">
                <div class="logo-mark large"></div>
                <h1>"Receipts in, expenses out."</h1>
                <p class="subtitle">
                    "Snap or drop a receipt, let the extractor read the merchant, date, total "
                    "and line items, then assign it to a person and export it as JSON or CSV."
                </p>
                <div class="hero-actions">
                    <A href="/scan" class="btn btn-primary">"Scan a receipt"</A>
                    <A href="/results" class="btn btn-ghost">"Browse receipts"</A>
                </div>
            </div>
            <ul class="hero-points">
                <li>"Photos and PDF receipts"</li>
                <li>"Confidence score and review flags"</li>
                <li>"Totals in the original currency or CAD"</li>
            </ul>
        </div>
    }
}
