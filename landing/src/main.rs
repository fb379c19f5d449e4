// ATH Creative Studio landing page, Leptos 0.8 CSR
// Developed by the ATH Creative Studio team (c)2025

mod relay;
mod sections;

use leptos::prelude::*;
use sections::*;
use studio_core::SiteConfig;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = SiteConfig::load_or_default(SITE_TOML)
        .with_site_url_override(option_env!("ATH_SITE_URL"));
    tracing::info!(endpoint = %config.form.endpoint, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <ConsoleBanner />
        <Header />
        <main class="page">
            <Hero />
            <CapabilityTicker />
            <StatsStrip />
            <ProblemSolution />
            <AuditForm />
            <ServiceDiscovery />
            <Footer />
        </main>
    }
}
