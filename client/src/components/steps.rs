//! "How it works" step explainer strip.

#[cfg(test)]
#[path = "steps_test.rs"]
mod steps_test;

use leptos::prelude::*;

/// One explainer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub detail: &'static str,
}

/// The marketplace onboarding steps, in display order.
pub const STEPS: &[Step] = &[
    Step { number: 1, title: "Tell us what you need", detail: "Describe the service you are looking for." },
    Step { number: 2, title: "Match with providers", detail: "Browse providers with the right skills near you." },
    Step { number: 3, title: "Book and get it done", detail: "Agree on details and track the job to completion." },
];

/// A single step card.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    view! {
        <div class="step-card">
            <span class="step-card__number">{step.number}</span>
            <h3 class="step-card__title">{step.title}</h3>
            <p class="step-card__detail">{step.detail}</p>
        </div>
    }
}

/// The full explainer strip with arrow connectors between cards.
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <h2>"How it works"</h2>
            <div class="how-it-works__strip">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <Show when=move || (i > 0)>
                                <span class="how-it-works__arrow" aria-hidden="true">{"\u{2192}"}</span>
                            </Show>
                            <StepCard step=*step/>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
