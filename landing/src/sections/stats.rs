use leptos::prelude::*;
use studio_core::content::STATS;

#[component]
pub fn StatsStrip() -> impl IntoView {
    view! {
        <div class="stats">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="stat">
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
