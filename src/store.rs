//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use wish_client::{Category, Notification};

/// Which top-level view is mounted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Before the restored session has been inspected
    #[default]
    Loading,
    Login,
    Main,
}

/// A notification on screen, keyed for removal
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub screen: Screen,
    /// Rendered feed or detail markup
    pub board: String,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
    /// Composer fields
    pub wish_title: String,
    pub wish_content: String,
    pub wish_category: Category,
    /// Header badge
    pub api_healthy: bool,
    pub api_label: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast and return its id
pub fn store_push_toast(store: &AppStore, notification: Notification) -> u64 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id + 1);
    store.toasts().write().push(Toast { id, notification });
    id
}

/// Remove a toast by id (no-op if already gone)
pub fn store_remove_toast(store: &AppStore, id: u64) {
    store.toasts().write().retain(|toast| toast.id != id);
}
