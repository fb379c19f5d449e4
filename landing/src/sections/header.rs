use leptos::prelude::*;
use studio_core::content::STUDIO_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <a href="#" class="header-brand">
                    <div class="header-logo">"A"</div>
                    <span class="header-title">{STUDIO_NAME}</span>
                </a>
                <a href="#audit" class="btn btn-primary btn-sm">
                    "Get Free Audit"
                </a>
            </div>
        </header>
    }
}
