// Landing page sections

mod faq;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod problems;
mod reveal;

pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use problems::Problems;
pub use reveal::Reveal;

use leptos::prelude::*;

use crate::content::CLOUDS_URL;

/// Smooth-scroll to a named section. Silently does nothing when the section
/// is not in the document (e.g. the landing content has not remounted yet).
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(el) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Fixed clouds texture with a soft white gradient on top, sitting behind
/// the whole page.
#[component]
pub fn CloudBackdrop() -> impl IntoView {
    view! {
        <div
            class="cloud-backdrop"
            style=format!("background-image: url({CLOUDS_URL})")
            aria-hidden="true"
        ></div>
        <div class="cloud-backdrop-overlay" aria-hidden="true"></div>
    }
}
