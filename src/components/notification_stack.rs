//! Notification Stack Component
//!
//! Renders the live toasts; `StoreView` removes each after its TTL.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notification-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = toast.notification.css_class();
                    let message = toast.notification.message;
                    view! { <div class=class>{message}</div> }
                }
            />
        </div>
    }
}
