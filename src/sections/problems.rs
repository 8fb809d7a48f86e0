use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::Reveal;
use crate::content::{Slide, REDDIT_URL, SLIDES};
use crate::state::selector::Selector;

/// Tabbed problems slider: a segmented control, one panel per slide, and
/// Prev/Next buttons. Left/Right arrow keys move the selection; navigation
/// clamps at both ends instead of wrapping.
#[component]
pub fn Problems() -> impl IntoView {
    let (selector, set_selector) = signal(Selector::new(SLIDES.len()));

    // Arrow keys steer the slider from anywhere on the page.
    Effect::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            set_selector.update(|s| {
                s.handle_key(&event.key());
            });
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    });

    view! {
        <section id="about" class="problems">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"ADHD Mental Struggles are Real"</h2>
                </Reveal>
                <Reveal delay=100>
                    <p class="section-subtitle">"We know because we experience it everyday"</p>
                </Reveal>

                <div class="segmented" role="tablist" aria-label="Problems">
                    {SLIDES
                        .iter()
                        .enumerate()
                        .map(|(i, slide)| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (selector.get().index() == i).to_string()
                                    class=move || {
                                        if selector.get().index() == i {
                                            "segment-tab active"
                                        } else {
                                            "segment-tab"
                                        }
                                    }
                                    on:click=move |_| set_selector.update(|s| s.jump(i as isize))
                                >
                                    {slide.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="slider">
                    <div
                        class="slider-track"
                        style=move || {
                            format!("transform: translateX(-{}%)", selector.get().index() * 100)
                        }
                    >
                        {SLIDES
                            .iter()
                            .enumerate()
                            .map(|(i, slide)| view! { <SlidePanel slide=slide index=i /> })
                            .collect_view()}
                    </div>

                    <div class="slider-nav">
                        <button
                            class="slider-nav-btn"
                            disabled=move || selector.get().at_start()
                            on:click=move |_| set_selector.update(|s| s.prev())
                        >
                            "\u{2190} Prev"
                        </button>
                        <button
                            class="slider-nav-btn"
                            disabled=move || selector.get().at_end()
                            on:click=move |_| set_selector.update(|s| s.next())
                        >
                            "Next \u{2192}"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SlidePanel(slide: &'static Slide, index: usize) -> impl IntoView {
    let panel_delay = index as u32 * 40 + 120;
    view! {
        <div class="slide" data-key=slide.key>
            <div class="slide-grid">
                <div class="slide-left">
                    <div class="card quote-card">
                        <p>"\u{201C}" {slide.quote} "\u{201D}"</p>
                    </div>
                    <div class="card rank-card">
                        <img src=REDDIT_URL alt="reddit" class="rank-logo" draggable="false" />
                        <div class="rank-text">{slide.rank}</div>
                    </div>
                </div>
                <Reveal delay=panel_delay>
                    <div class="slide-panel" style=format!("background: {}", slide.panel_bg)>
                        <div class="slide-panel-grid">
                            <div class="slide-panel-copy">
                                <h3>{slide.panel_title}</h3>
                                <p>{slide.panel_text}</p>
                            </div>
                            {slide
                                .art
                                .map(|src| {
                                    view! {
                                        <img
                                            src=src
                                            alt=slide.art_alt
                                            class="slide-art"
                                            draggable="false"
                                        />
                                    }
                                })}
                        </div>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
