//! Application Context
//!
//! Shared handle to the controller, provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wish_client::Controller;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller is not `Send`; it lives in local arena storage
    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: Rc<Controller>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    /// Run a controller action on the local executor
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move { action(controller).await });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
