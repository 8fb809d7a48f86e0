use leptos::prelude::*;

use super::Reveal;
use crate::content::{Align, Step, LAPTOP_URL, STEPS};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"How Clearity Works"</h2>
                </Reveal>

                <div class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            let delay = i as u32 * 80;
                            view! { <StepRow step=step delay=delay /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepRow(step: &'static Step, delay: u32) -> impl IntoView {
    // Text/image order alternates per row; the stylesheet flips the
    // reversed variant so the markup stays in one shape.
    let row_class = match step.align {
        Align::Left => "step-grid",
        Align::Right => "step-grid reversed",
    };
    let media_delay = delay + 120;

    view! {
        <div class=row_class>
            <Reveal delay=delay class="step-copy">
                <div class="step-inner">
                    <div class="step-number" aria-hidden="true">
                        {step.n}
                    </div>
                    <div class="step-body">
                        <h3 class="step-title">{step.title}</h3>
                        <p class="step-text">{step.text}</p>
                        <p class="step-result">"Result: " {step.result}</p>
                    </div>
                </div>
            </Reveal>
            <Reveal delay=media_delay class="step-media">
                <img src=LAPTOP_URL alt="Laptop" class="step-laptop" />
            </Reveal>
        </div>
    }
}
