use leptos::prelude::*;
use studio_core::content::{SERVICE_CATEGORIES, ServiceCategory};
use studio_core::rotation::ExclusiveChoice;

#[component]
pub fn ServiceDiscovery() -> impl IntoView {
    let tabs = RwSignal::new(ExclusiveChoice::new(&SERVICE_CATEGORIES, &SERVICE_CATEGORIES[0]));

    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Our Approach"</p>
                    <h2 class="section-title">"32 Ways We Can Help"</h2>
                    <p class="section-description">
                        "From one-off campaigns to becoming your full external media team"
                    </p>
                </div>

                <div class="category-tabs">
                    {tabs
                        .with_untracked(|t| t.options())
                        .iter()
                        .map(|category| view! {
                            <button
                                type="button"
                                class=move || {
                                    if tabs.with(|t| t.is_selected(category)) {
                                        "category-tab active"
                                    } else {
                                        "category-tab"
                                    }
                                }
                                on:click=move |_| {
                                    tabs.update(|t| {
                                        t.select(category);
                                    })
                                }
                            >
                                <span class=format!("icon icon-{}", category.icon)></span>
                                <span>{category.name}</span>
                            </button>
                        })
                        .collect_view()}
                </div>

                {move || {
                    tabs.with(|t| t.selected().copied())
                        .map(|category| view! { <ServiceGrid category=category /> })
                }}

                <div class="services-cta">
                    <p class="muted">"Don't see what you need? We're flexible."</p>
                    <a href="#audit" class="btn btn-secondary">
                        "Tell us what you're looking for →"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceGrid(category: ServiceCategory) -> impl IntoView {
    view! {
        <div class="service-grid" data-category=category.name>
            {category
                .services
                .iter()
                .enumerate()
                .map(|(i, service)| view! {
                    <div class="service-card" style=format!("animation-delay: {}ms;", i * 50)>
                        <div class="service-icon">
                            <span class=format!("icon icon-{}", service.icon)></span>
                        </div>
                        <p class="service-title">{service.title}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
