//! Entry point for the WASM application

use leptos::*;
use receipt_scan::App;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Receipt Scan - starting Leptos app");

    mount_to_body(|| view! { <App/> })
}
