use leptos::prelude::*;
use studio_core::content::ticker_sequence;

/// Endless marquee; the CSS animation translates the track by -50%.
#[component]
pub fn CapabilityTicker() -> impl IntoView {
    view! {
        <div class="ticker">
            <div class="ticker-fade ticker-fade-left"></div>
            <div class="ticker-fade ticker-fade-right"></div>
            <div class="ticker-track">
                {ticker_sequence()
                    .map(|capability| view! {
                        <div class="ticker-item">
                            <span class="ticker-text">{capability}</span>
                            <span class="ticker-sep">"•"</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
