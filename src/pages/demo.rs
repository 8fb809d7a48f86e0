use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;

use crate::content::{DEMO_CONTACT_EMAIL, DEMO_VIDEO_URL, WAITLIST_URL};
use crate::sections::{CloudBackdrop, Reveal};

/// Embedded video demo with the waitlist call to action.
#[component]
pub fn DemoPage() -> impl IntoView {
    let mailto = format!("mailto:{DEMO_CONTACT_EMAIL}");

    view! {
        <CloudBackdrop />
        <section class="demo">
            <div class="container demo-content">
                <Reveal delay=50>
                    <h1 class="demo-title">
                        "Welcome to the future of the clear mind and clear thoughts"
                    </h1>
                </Reveal>

                <Reveal delay=100>
                    <p class="demo-contact">
                        "Have questions? Contact us at "
                        <a class="contact-link" href=mailto>
                            {DEMO_CONTACT_EMAIL}
                        </a>
                    </p>
                </Reveal>

                <Reveal delay=150>
                    <div class="video-frame">
                        <iframe
                            src=DEMO_VIDEO_URL
                            title="Clearity Demo"
                            {..custom_attribute("frameborder", "0")}
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen="true"
                        ></iframe>
                    </div>
                </Reveal>

                <Reveal delay=250>
                    <a href=WAITLIST_URL class="btn btn-gradient btn-large">
                        "Join the waitlist"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
