//! Wish Composer Component
//!
//! Title, category and content for a new wish. Fields live in the store so
//! the controller can clear them after a successful post.

use leptos::prelude::*;
use wish_client::{Category, WishDraft};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WishComposer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = WishDraft {
            title: store.wish_title().get_untracked(),
            content: store.wish_content().get_untracked(),
            category: store.wish_category().get_untracked(),
        };
        ctx.spawn(move |controller| async move { controller.submit_wish(&draft).await });
    };

    view! {
        <form class="wish-input-section" on:submit=on_submit>
            <h2>"Share Your Wish"</h2>
            <input
                type="text"
                placeholder="Wish Title"
                class="input-field"
                prop:value=move || store.wish_title().get()
                on:input=move |ev| store.wish_title().set(event_target_value(&ev))
            />
            <select
                class="input-field"
                prop:value=move || store.wish_category().get().as_str()
                on:change=move |ev| store.wish_category().set(Category::from_str(&event_target_value(&ev)))
            >
                {Category::SELECTABLE.iter().map(|category| view! {
                    <option value=category.as_str()>{category.label()}</option>
                }).collect_view()}
            </select>
            <textarea
                placeholder="Describe your wish..."
                class="input-field"
                rows="4"
                prop:value=move || store.wish_content().get()
                on:input=move |ev| store.wish_content().set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="submit-btn">"Post Wish"</button>
        </form>
    }
}
