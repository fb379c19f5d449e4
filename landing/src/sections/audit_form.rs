//! "Get Your Free Media Audit" lead form.
//!
//! All state lives in one `LeadForm` signal; handlers call its methods and
//! the view re-derives visibility, errors and the submit control from it.

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use studio_core::validation::Field;
use studio_core::{
    ContactChannel, DetailField, FinishOutcome, FormPhase, Goal, LeadForm, Revenue, SiteConfig,
    SubmitOutcome, Timeline,
};

use crate::relay;

#[component]
pub fn AuditForm() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let form = RwSignal::new(LeadForm::new(config.success_display()));
    let endpoint = StoredValue::new(config.form.endpoint);
    let reset_timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = reset_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(SubmitOutcome::Send(payload)) = form.try_update(|f| f.submit()) else {
            return;
        };
        let endpoint = endpoint.get_value();

        spawn_local(async move {
            let result = relay::post_lead(&endpoint, &payload).await;
            match form.try_update(|f| f.finish(result)) {
                Some(FinishOutcome::Succeeded { reset_after }) => {
                    let reset = move || {
                        form.try_update(|f| f.success_elapsed());
                    };
                    match set_timeout_with_handle(reset, reset_after) {
                        Ok(handle) => reset_timer.set_value(Some(handle)),
                        Err(err) => {
                            tracing::warn!(?err, "could not schedule form reset");
                            form.try_update(|f| f.success_elapsed());
                        }
                    }
                }
                Some(FinishOutcome::Failed(err)) => relay::alert(err.visitor_message()),
                Some(FinishOutcome::Ignored) | None => {}
            }
        });
    };

    view! {
        <section id="audit" class="audit">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Get Your Free Media Audit"</h2>
                    <p class="section-description">
                        "We'll review your current presence and show you what's working (and what's not)."
                    </p>
                </div>

                <div class="form-card">
                    <form class="audit-form" novalidate=true on:submit=on_submit>
                        <div class="form-field">
                            <label for="project" class="form-label">"Project Name + Link *"</label>
                            <input
                                id="project"
                                class="form-input"
                                placeholder="e.g., YourProject.xyz or @YourTwitter"
                                prop:value=move || form.with(|f| f.draft().project.clone())
                                on:input=move |ev| form.update(|f| f.set_project(event_target_value(&ev)))
                            />
                            <FieldError form=form field=Field::Project />
                        </div>

                        <GoalPicker form=form />

                        <div class="form-field">
                            <span class="form-label">"Timeline"</span>
                            <SegmentedControl form=form />
                        </div>

                        <div class="form-field">
                            <label for="revenue" class="form-label">"Monthly Revenue"</label>
                            <select
                                id="revenue"
                                class="form-input"
                                prop:value=move || form.with(|f| f.draft().revenue.map(Revenue::as_str).unwrap_or_default())
                                on:change=move |ev| {
                                    let revenue = event_target_value(&ev).parse::<Revenue>().ok();
                                    form.update(|f| f.update_draft(|d| d.revenue = revenue));
                                }
                            >
                                <option value="">"Select your revenue range..."</option>
                                {Revenue::ALL
                                    .into_iter()
                                    .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-field">
                            <label for="email" class="form-label">"Email *"</label>
                            <input
                                id="email"
                                type="email"
                                class="form-input"
                                placeholder="your@email.com"
                                prop:value=move || form.with(|f| f.draft().email.clone())
                                on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                            />
                            <FieldError form=form field=Field::Email />
                        </div>

                        <ContactPicker form=form />

                        <div class="form-submit">
                            <button
                                type="submit"
                                class="btn btn-primary btn-block"
                                disabled=move || form.with(LeadForm::submit_disabled)
                            >
                                <Show when=move || form.with(|f| f.phase() == FormPhase::Submitting)>
                                    <span class="spinner" aria-hidden="true"></span>
                                </Show>
                                {move || form.with(LeadForm::submit_label)}
                            </button>
                            <p class="form-fineprint">
                                "By submitting, you agree to our Terms of Service. No spam, ever."
                            </p>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FieldError(form: RwSignal<LeadForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
fn GoalPicker(form: RwSignal<LeadForm>) -> impl IntoView {
    view! {
        <div class="form-field">
            <span class="form-label">"What are you looking for?"</span>
            <div class="goal-options">
                {Goal::ALL
                    .into_iter()
                    .map(|goal| view! {
                        <label class="goal-option">
                            <input
                                type="radio"
                                name="goal"
                                value=goal.as_str()
                                prop:checked=move || form.with(|f| f.draft().goal == goal)
                                on:change=move |_| form.update(|f| f.update_draft(|d| d.goal = goal))
                            />
                            <div class="goal-text">
                                <span class="goal-title">{goal.label()}</span>
                                {goal.hint().map(|hint| view! { <span class="goal-hint">{hint}</span> })}
                            </div>
                        </label>
                    })
                    .collect_view()}
            </div>

            <Show when=move || form.with(|f| f.draft().needs_visible())>
                <textarea
                    class="form-input form-textarea"
                    placeholder="Tell us what you need..."
                    prop:value=move || form.with(|f| f.draft().needs.clone())
                    on:input=move |ev| {
                        let needs = event_target_value(&ev);
                        form.update(|f| f.update_draft(|d| d.needs = needs));
                    }
                ></textarea>
            </Show>
        </div>
    }
}

#[component]
fn SegmentedControl(form: RwSignal<LeadForm>) -> impl IntoView {
    view! {
        <div class="segmented">
            {Timeline::ALL
                .into_iter()
                .map(|timeline| view! {
                    <button
                        type="button"
                        class=move || {
                            if form.with(|f| f.draft().timeline == timeline) {
                                "segmented-option active"
                            } else {
                                "segmented-option"
                            }
                        }
                        on:click=move |_| form.update(|f| f.update_draft(|d| d.timeline = timeline))
                    >
                        {timeline.as_str()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactPicker(form: RwSignal<LeadForm>) -> impl IntoView {
    view! {
        <div class="form-field">
            <span class="form-label">"Best way to reach you?"</span>
            <div class="toggle-cards">
                {ContactChannel::ALL
                    .into_iter()
                    .map(|channel| view! {
                        <button
                            type="button"
                            class=move || {
                                if form.with(|f| f.draft().contact == channel) {
                                    "toggle-card selected"
                                } else {
                                    "toggle-card"
                                }
                            }
                            aria-pressed=move || form.with(|f| (f.draft().contact == channel).to_string())
                            on:click=move |_| form.update(|f| f.update_draft(|d| d.contact = channel))
                        >
                            <span class=format!("icon icon-{}", channel.as_str())></span>
                            <span class="toggle-card-title">{channel.label()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>

            {DetailField::ALL
                .into_iter()
                .map(|field| view! {
                    <Show when=move || form.with(|f| f.draft().detail_visible(field))>
                        <input
                            class="form-input form-detail"
                            aria-label=field.label()
                            placeholder=field.placeholder()
                            prop:value=move || form.with(|f| f.draft().detail(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_draft(|d| d.set_detail(field, value)));
                            }
                        />
                    </Show>
                })
                .collect_view()}
        </div>
    }
}
