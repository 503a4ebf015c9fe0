//! Static site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <h3>"BikeMarket"</h3>
                <p>"Your trusted marketplace for buying and selling used bikes."</p>
            </div>
            <p class="site-footer__copyright">"© 2024 BikeMarket. All rights reserved."</p>
        </footer>
    }
}
