//! Wish Wall Frontend App
//!
//! Builds the controller from the browser seams and switches between the
//! auth panel and the main view.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use wish_client::{ClientConfig, Controller, Session};

use crate::browser::{BrowserTokenStore, FetchBackend, StoreView};
use crate::components::{AuthPanel, HeaderNav, NotificationStack, WishBoard, WishComposer};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, Screen};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    log::info!("Wish Wall client using {}", config.api_base_url);

    // Global store
    let store = Store::new(AppState::new());
    provide_context(store);

    // Controller wired to the browser
    let view = Rc::new(StoreView::new(store, config.notification_ttl));
    let session = Rc::new(Session::restore(BrowserTokenStore::open(&config.token_storage_key)));
    let controller = Rc::new(Controller::new(config, FetchBackend, session, view));
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Initial view from the persisted token, then the header badge
    Effect::new(move |_| {
        ctx.spawn(|controller| async move {
            controller.start().await;
            controller.load_service_info().await;
        });
    });

    view! {
        <header class="app-header">
            <h1>"Wish Wall"</h1>
            <p class="subtitle">"Share your wishes with the world"</p>
        </header>

        <main>
            {move || match store.screen().get() {
                Screen::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Screen::Login => view! { <AuthPanel /> }.into_any(),
                Screen::Main => view! {
                    <div class="main-app">
                        <HeaderNav />
                        <WishComposer />
                        <WishBoard />
                    </div>
                }.into_any(),
            }}
        </main>

        <NotificationStack />
    }
}
