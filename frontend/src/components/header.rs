use leptos::*;
use leptos_router::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="nav">
            <div class="header-left">
                <A href="/" class="logo">
                    <span class="logo-mark"></span>
                    "Receipt Scan"
                </A>
            </div>
            <nav class="header-right">
                <A href="/" exact=true class="nav-link">"Home"</A>
                <A href="/scan" class="nav-link">"Upload"</A>
                <A href="/results" class="nav-link">"Results"</A>
            </nav>
        </header>
    }
}
