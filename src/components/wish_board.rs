//! Wish Board Component
//!
//! Hosts the rendered feed/detail markup. Clicks are delegated: the
//! nearest `[data-action]` element names the action and wish.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use wish_client::BoardAction;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WishBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(button)) = target.closest("[data-action]") else {
            return;
        };
        let action = button.get_attribute("data-action").unwrap_or_default();
        let wish_id = button.get_attribute("data-wish-id");
        match BoardAction::parse(&action, wish_id.as_deref()) {
            Some(action) => ctx.spawn(move |controller| async move { controller.dispatch(action).await }),
            None => log::debug!("ignoring board click on {:?}", action),
        }
    };

    view! {
        <section class="wishes-display">
            <h2>"Wishes"</h2>
            <div
                id="wishesList"
                class="wishes-list"
                on:click=on_click
                inner_html=move || store.board().get()
            ></div>
        </section>
    }
}
