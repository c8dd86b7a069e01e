//! Store-backed View
//!
//! Implements the controller's `ViewPort` by writing into the app store;
//! components render from the store.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wish_client::{Feedback, Notification, ServiceInfo, ViewPort};

use crate::store::{store_push_toast, store_remove_toast, AppStateStoreFields, AppStore, Screen};

#[derive(Clone, Copy)]
pub struct StoreView {
    store: AppStore,
    toast_ttl_ms: u32,
}

impl StoreView {
    pub fn new(store: AppStore, toast_ttl: Duration) -> Self {
        Self {
            store,
            toast_ttl_ms: toast_ttl.as_millis().min(u32::MAX as u128) as u32,
        }
    }
}

impl Feedback for StoreView {
    fn notify(&self, notification: Notification) {
        let id = store_push_toast(&self.store, notification);
        let store = self.store;
        let ttl = self.toast_ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store_remove_toast(&store, id);
        });
    }

    fn show_login(&self) {
        self.store.board().set(String::new());
        self.store.screen().set(Screen::Login);
    }
}

impl ViewPort for StoreView {
    fn show_main(&self) {
        self.store.screen().set(Screen::Main);
    }

    fn show_board(&self, markup: String) {
        self.store.board().set(markup);
    }

    fn clear_wish_form(&self) {
        self.store.wish_title().set(String::new());
        self.store.wish_content().set(String::new());
    }

    fn show_service_status(&self, healthy: bool, info: Option<&ServiceInfo>) {
        self.store.api_healthy().set(healthy);
        self.store.api_label().set(info.map(|i| i.label()));
    }
}
