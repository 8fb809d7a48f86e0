// Clearity Landing Page — Leptos 0.8 Edition

mod content;
mod pages;
mod sections;
mod state;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use pages::{DemoPage, HomePage};
use sections::Nav;
use state::page::Page;

fn main() {
    console_error_panic_hook::set_once();
    print_console_banner();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

/// Composition root: owns the two-state page toggle and hands it down.
#[component]
fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    view! {
        <Nav page=page set_page=set_page />
        <main>
            <Show
                when=move || page.get() == Page::Home
                fallback=move || view! { <DemoPage /> }
            >
                <HomePage set_page=set_page />
            </Show>
        </main>
    }
}

fn print_console_banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%cClearity — Find your Clearity"),
        &JsValue::from_str("color: #244FBF; font-weight: bold;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cBuilt with Rust + Leptos."),
        &JsValue::from_str("color: #888;"),
    );
}
