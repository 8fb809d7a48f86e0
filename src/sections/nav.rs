use std::time::Duration;

use leptos::prelude::*;

use super::scroll_to_section;
use crate::content::{LOGO_URL, WAITLIST_URL};
use crate::state::page::{Page, ScrollPlan};

/// Sticky translucent header shared by the landing and demo views.
///
/// Section links scroll in place on the landing view; from the demo view
/// they first switch back home, then scroll once the content has remounted.
#[component]
pub fn Nav(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    let go_section = move |id: &'static str| match page.get_untracked().plan_section_scroll() {
        ScrollPlan::Immediate => scroll_to_section(id),
        ScrollPlan::AfterReturn { delay_ms } => {
            set_page.set(Page::Home);
            set_timeout(move || scroll_to_section(id), Duration::from_millis(delay_ms));
        }
    };

    view! {
        <header class="nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand" on:click=move |_| set_page.set(Page::Home)>
                    <img src=LOGO_URL alt="Clearity" class="nav-logo" draggable="false" />
                    <span class="nav-title">"Clearity"</span>
                </a>

                <nav class="nav-links">
                    <button class="nav-link" on:click=move |_| set_page.set(Page::Home)>
                        "Home"
                    </button>
                    <button class="nav-link" on:click=move |_| go_section("about")>
                        "About"
                    </button>
                    <button class="nav-link" on:click=move |_| go_section("faq")>
                        "FAQ"
                    </button>
                    <button
                        class=move || {
                            if page.get() == Page::Demo { "nav-link active" } else { "nav-link" }
                        }
                        on:click=move |_| set_page.set(Page::Demo)
                    >
                        "Demo"
                    </button>
                </nav>

                <a href=WAITLIST_URL class="btn btn-gradient">
                    "Join the waitlist"
                </a>
            </div>
        </header>
    }
}
