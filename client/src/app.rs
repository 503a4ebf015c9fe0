//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::net::api::HttpAuthApi;
use crate::pages::{home::HomePage, login::LoginPage, product_detail::ProductDetailPage, register::RegisterPage};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and the auth API client, provides both as context,
/// and starts the one-time session probe in the browser. Rendering never
/// waits for the probe; views treat the unresolved state explicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new());
    provide_context(session);
    provide_context(HttpAuthApi::default());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<HttpAuthApi>();
        leptos::task::spawn_local(async move {
            crate::state::session::run_probe(&api, session).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/bikemarket.css"/>
        <Title text="BikeMarket"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
