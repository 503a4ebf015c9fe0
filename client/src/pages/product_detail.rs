//! Listing detail page, visible to signed-in users only.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalogue::{Listing, find_listing};
use crate::components::require_session::RequireSession;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let listing = move || params.with(|p| p.get("id")).and_then(|id| find_listing(&id));

    view! {
        <RequireSession>
            {move || match listing() {
                Some(listing) => view! { <ListingDetail listing=listing/> }.into_any(),
                None => view! { <ListingNotFound/> }.into_any(),
            }}
        </RequireSession>
    }
}

#[component]
fn ListingDetail(listing: &'static Listing) -> impl IntoView {
    view! {
        <div class="listing-detail">
            <img class="listing-detail__image" src=listing.image alt=listing.name/>
            <div class="listing-detail__info">
                <h1>{listing.name}</h1>
                <dl class="listing-detail__facts">
                    <dt>"Model:"</dt>
                    <dd>{listing.model}</dd>
                    <dt>"Color:"</dt>
                    <dd>{listing.color}</dd>
                    <dt>"KM Driven:"</dt>
                    <dd>{listing.km_label()}</dd>
                    <dt>"Price:"</dt>
                    <dd class="listing-detail__price">{listing.price_label()}</dd>
                </dl>
                <h3>"Description"</h3>
                <p>{listing.description}</p>
                <div class="listing-detail__actions">
                    <button type="button" class="button button--primary">"Contact Seller"</button>
                    <button type="button" class="button button--outline">"Make Offer"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ListingNotFound() -> impl IntoView {
    view! {
        <div class="listing-detail listing-detail--missing">
            <h2>"Product not found"</h2>
            <p>"The product you're looking for doesn't exist."</p>
        </div>
    }
}
