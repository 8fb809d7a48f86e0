use leptos::prelude::*;

use super::Reveal;
use crate::content::{FaqItem, FAQ_CONTACT_EMAIL, FAQ_ITEMS};
use crate::state::disclosure::Disclosure;

#[component]
pub fn Faq() -> impl IntoView {
    let mailto = format!("mailto:{FAQ_CONTACT_EMAIL}");

    view! {
        <section id="faq" class="faq">
            <div class="container">
                <Reveal>
                    <h2 class="section-title accent">"Frequently Asked Questions"</h2>
                </Reveal>
                <Reveal delay=100>
                    <p class="section-subtitle">
                        "If you have a question that isn\u{2019}t listed here, shoot us a note at "
                        <a class="contact-link" href=mailto>
                            {FAQ_CONTACT_EMAIL}
                        </a>
                    </p>
                </Reveal>

                <div class="faq-grid">
                    {FAQ_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let delay = i as u32 * 60;
                            view! {
                                <Reveal delay=delay>
                                    <FaqCard item=item />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One question/answer card. Each card owns its flag independently, so
/// opening one never closes another.
#[component]
fn FaqCard(item: &'static FaqItem) -> impl IntoView {
    let (state, set_state) = signal(Disclosure::new(item.default_open));

    view! {
        <div class="faq-card">
            <button
                class="faq-question"
                aria-expanded=move || state.get().is_open().to_string()
                on:click=move |_| set_state.update(|d| d.toggle())
            >
                {item.question}
                <span class="faq-glyph">
                    {move || if state.get().is_open() { "\u{2212}" } else { "+" }}
                </span>
            </button>
            <Show when=move || state.get().is_open()>
                <div class="faq-answer">{item.answer}</div>
            </Show>
        </div>
    }
}
