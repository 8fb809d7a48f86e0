// Landing content: hero + problems slider + walkthrough + FAQ
use leptos::prelude::*;

use crate::sections::{Faq, Footer, Hero, HowItWorks, Problems};
use crate::state::page::Page;

#[component]
pub fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <Hero set_page=set_page />
        <Problems />
        <HowItWorks />
        <Faq />
        <Footer />
    }
}
