use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::reveal::{RevealConfig, RevealState};

/// Wraps a region and fades it in (opacity + translate) the first time at
/// least 15% of it enters the viewport. `repeat=true` re-hides the region
/// when it leaves view so the transition can fire again.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: u32,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] repeat: bool,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (shown, set_shown) = signal(false);
    let config = RevealConfig { once: !repeat, ..RevealConfig::default() };

    Effect::new(move || {
        // Not attached yet: skip, the effect re-runs once the ref resolves.
        let Some(el) = node.get() else { return };

        let mut state = RevealState::default();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let release = state.on_intersection(entry.is_intersecting(), &config);
                    set_shown.set(state.is_shown());
                    if release {
                        observer.disconnect();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            observer.observe(&el);
        }
        callback.forget();
    });

    view! {
        <div
            node_ref=node
            class=move || {
                if shown.get() {
                    format!("reveal shown {class}")
                } else {
                    format!("reveal {class}")
                }
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}
