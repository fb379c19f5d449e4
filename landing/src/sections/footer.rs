use leptos::prelude::*;
use studio_core::SiteConfig;
use studio_core::content::STUDIO_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let links = use_context::<SiteConfig>().unwrap_or_default().links;
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo" aria-hidden="true">"A"</span>
                    <span class="footer-title">{STUDIO_NAME}</span>
                </div>
                <div class="footer-links">
                    <a href=links.work target="_blank" rel="noopener noreferrer" class="footer-link">
                        "See Our Work"
                    </a>
                    <a href=links.follow target="_blank" rel="noopener noreferrer" class="footer-link">
                        <span class="icon icon-x"></span>
                        "Follow on X"
                    </a>
                </div>
                <p class="footer-copyright">
                    "© 2026 " {STUDIO_NAME} ". Working globally."
                </p>
            </div>
        </footer>
    }
}
