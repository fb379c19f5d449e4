use leptos::prelude::*;
use studio_core::SiteConfig;
use studio_core::content::HERO_CAPABILITIES;
use studio_core::rotation::Rotator;

#[component]
pub fn Hero() -> impl IntoView {
    let interval = use_context::<SiteConfig>()
        .unwrap_or_default()
        .rotate_interval();
    let rotator = RwSignal::new(Rotator::new(&HERO_CAPABILITIES));

    // Runs for as long as the hero is mounted
    match set_interval_with_handle(move || rotator.update(|r| r.advance()), interval) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => tracing::warn!(?err, "could not start headline rotation"),
    }

    let capability_count = HERO_CAPABILITIES.len();

    view! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    "Trusted by Solana Ecosystem"
                </div>
                <h1 class="hero-title">
                    "We Help Web3 Projects "
                    <br />
                    "Convert Attention Into Revenue Through "
                    <span class="hero-rotator">
                        {move || {
                            let (index, text) = rotator.with(|r| (r.index(), r.current().copied().unwrap_or_default()));
                            view! {
                                <span class="hero-rotator-item" data-index=index.to_string()>
                                    {text}
                                </span>
                            }
                        }}
                    </span>
                </h1>
                <p class="hero-description">
                    "From quick clips to full-time embedded media teams — we do it all."
                </p>
                <p class="hero-meta">
                    <span class="accent">{capability_count}</span>
                    " services • Tailored approach • Permanently onchain"
                </p>
                <div class="hero-actions">
                    <a href="#audit" class="btn btn-primary btn-lg">
                        "Get Free Media Audit →"
                    </a>
                </div>
            </div>
        </section>
    }
}
