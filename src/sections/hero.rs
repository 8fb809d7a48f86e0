use leptos::prelude::*;

use super::Reveal;
use crate::content::{CLOUDS_URL, WAITLIST_URL};
use crate::state::page::Page;

#[component]
pub fn Hero(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <section class="hero">
            <div
                class="hero-clouds"
                style=format!("background-image: url({CLOUDS_URL})")
                aria-hidden="true"
            ></div>
            <div class="hero-overlay" aria-hidden="true"></div>

            <div class="container hero-content">
                <Reveal delay=50>
                    <p class="hero-eyebrow">"By ADHD individuals for ADHD community"</p>
                </Reveal>
                <Reveal delay=150>
                    <h1 class="hero-title">"Find your Clearity"</h1>
                </Reveal>
                <Reveal delay=250>
                    <p class="hero-subtitle">
                        "Organize your mind \u{2192} Take actions \u{2192} See results"
                    </p>
                </Reveal>
                <Reveal delay=350>
                    <div class="hero-actions">
                        <a href=WAITLIST_URL class="btn btn-gradient">
                            "Join the waitlist"
                        </a>
                        <button class="btn btn-outline" on:click=move |_| set_page.set(Page::Demo)>
                            "Watch the Demo"
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
