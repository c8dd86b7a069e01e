//! Header Navigation Component
//!
//! Logout button and the API status badge.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HeaderNav() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let status_class = move || {
        if store.api_healthy().get() { "api-status online" } else { "api-status offline" }
    };
    let status_text = move || match store.api_label().get() {
        Some(label) => label,
        None if store.api_healthy().get() => "API online".to_string(),
        None => "API unreachable".to_string(),
    };

    view! {
        <div class="app-header-nav">
            <span class=status_class>{status_text}</span>
            <button class="logout-btn" on:click=move |_| ctx.controller().logout()>
                "Logout"
            </button>
        </div>
    }
}
