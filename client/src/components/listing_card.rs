//! Catalogue card linking to a listing's detail page.

#[cfg(test)]
#[path = "listing_card_test.rs"]
mod listing_card_test;

use leptos::prelude::*;

use crate::catalogue::Listing;
use crate::state::session::{SessionState, SessionStore};
use crate::util::auth::login_redirect_path;

/// Where "View details" should go: straight to the listing, or through login
/// when the visitor is known to be anonymous.
pub fn details_href(state: &SessionState, listing: &Listing) -> String {
    match state {
        SessionState::Anonymous => login_redirect_path(&listing.path()),
        SessionState::Authenticated(_) | SessionState::Unknown => listing.path(),
    }
}

#[component]
pub fn ListingCard(listing: &'static Listing) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let href = move || session.with(|s| details_href(s.state(), listing));

    view! {
        <article class="listing-card">
            <img class="listing-card__image" src=listing.image alt=listing.name loading="lazy"/>
            <div class="listing-card__body">
                <h3 class="listing-card__name">{listing.name}</h3>
                <p class="listing-card__meta">{format!("{} · {} · {}", listing.model, listing.color, listing.km_label())}</p>
                <p class="listing-card__price">{listing.price_label()}</p>
                <a class="button button--primary listing-card__details" href=href>
                    "View details"
                </a>
            </div>
        </article>
    }
}
