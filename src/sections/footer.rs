use leptos::prelude::*;

use crate::content::WAITLIST_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-copyright">"\u{00A9} 2025 Clearity"</div>
                <div class="footer-links">
                    <a class="footer-link" href="#">
                        "Privacy"
                    </a>
                    <a class="footer-link" href="#">
                        "Terms"
                    </a>
                    <a href=WAITLIST_URL class="btn btn-gradient">
                        "Join the waitlist"
                    </a>
                </div>
            </div>
        </footer>
    }
}
