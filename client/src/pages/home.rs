//! Catalogue landing page.

use leptos::prelude::*;

use crate::catalogue::listings;
use crate::components::listing_card::ListingCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Find Your Perfect Ride"</h1>
                <p>"Discover amazing deals on used bikes from trusted sellers"</p>
            </section>
            <section class="listings">
                <h2>"Featured Bikes"</h2>
                <div class="listings__grid">
                    {listings().iter().map(|listing| view! { <ListingCard listing=listing/> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
