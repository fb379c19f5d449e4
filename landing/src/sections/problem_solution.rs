use leptos::prelude::*;
use studio_core::content::PROBLEM_PARAGRAPHS;

#[component]
pub fn ProblemSolution() -> impl IntoView {
    view! {
        <section class="problem">
            <div class="container problem-grid">
                <div class="problem-copy">
                    <p class="section-eyebrow">"The Problem"</p>
                    <h2 class="section-title">
                        "Web3 projects live and die "
                        <span class="muted">"by momentum."</span>
                    </h2>
                    {PROBLEM_PARAGRAPHS
                        .iter()
                        .map(|p| view! { <p class="problem-text">{*p}</p> })
                        .collect_view()}
                </div>

                <div class="solution-card">
                    <div class="solution-rows">
                        <SolutionRow active=false />
                        <SolutionRow active=true />
                        <SolutionRow active=false />
                    </div>
                    <div class="solution-footer">
                        <p class="solution-title">"We become your external media arm."</p>
                        <p class="solution-subtitle">"From one-off campaigns to long-term presence."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionRow(active: bool) -> impl IntoView {
    let class = if active { "solution-row active" } else { "solution-row" };
    view! {
        <div class=class>
            <div class="solution-dot">{if active { "✓" } else { "▶" }}</div>
            <div class="solution-bars">
                <div class="solution-bar wide"></div>
                <div class="solution-bar"></div>
            </div>
        </div>
    }
}
