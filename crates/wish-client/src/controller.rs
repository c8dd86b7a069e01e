//! View Controller
//!
//! The UI actions. Each one reads its inputs, validates locally, makes at
//! most one mutating request, and re-renders from a fresh fetch on success.
//! Rendering goes through `ViewPort`, so actions run the same against the
//! DOM or a test double.

use std::rc::Rc;

use crate::api::WishApi;
use crate::config::ClientConfig;
use crate::domain::{Notification, ServiceInfo};
use crate::error::ValidationError;
use crate::forms::{LoginForm, RegisterForm, WishDraft};
use crate::render::{self, BoardAction};
use crate::session::Session;
use crate::transport::{ApiClient, Feedback, HttpBackend};

/// Page the feed always shows
const FEED_PAGE: u32 = 1;

/// Everything the controller can ask of the page
pub trait ViewPort: Feedback {
    fn show_main(&self);

    /// Replace the board (feed or detail) with rendered markup
    fn show_board(&self, markup: String);

    /// Empty the composer's title and content
    fn clear_wish_form(&self);

    fn show_service_status(&self, healthy: bool, info: Option<&ServiceInfo>);
}

pub struct Controller {
    api: WishApi,
    session: Rc<Session>,
    view: Rc<dyn ViewPort>,
}

impl Controller {
    pub fn new<V: ViewPort + 'static>(
        config: ClientConfig,
        backend: impl HttpBackend + 'static,
        session: Rc<Session>,
        view: Rc<V>,
    ) -> Self {
        let feedback: Rc<dyn Feedback> = view.clone();
        let client = ApiClient::new(config, backend, session.clone(), feedback);
        Self {
            api: WishApi::new(client),
            session,
            view,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Initial view from the restored session
    pub async fn start(&self) {
        if self.session.is_authenticated() {
            self.view.show_main();
            self.load_wishes().await;
        } else {
            self.view.show_login();
        }
    }

    pub async fn register(&self, form: &RegisterForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => return self.reject(err),
        };
        if let Ok(auth) = self.api.register(&request).await {
            self.session.sign_in(auth.access_token);
            self.view.notify(Notification::success("Registration successful!"));
            self.view.show_main();
            self.load_wishes().await;
        }
    }

    pub async fn login(&self, form: &LoginForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => return self.reject(err),
        };
        if let Ok(auth) = self.api.login(&request).await {
            log::info!("signed in as {}", request.username);
            self.session.sign_in(auth.access_token);
            self.view.notify(Notification::success("Login successful!"));
            self.view.show_main();
            self.load_wishes().await;
        }
    }

    pub fn logout(&self) {
        self.session.sign_out();
        self.view.notify(Notification::success("Logged out successfully"));
        self.view.show_login();
    }

    pub async fn load_wishes(&self) {
        if let Ok(page) = self.api.list_wishes(FEED_PAGE).await {
            self.view.show_board(render::render_feed(&page.wishes));
        }
    }

    pub async fn submit_wish(&self, draft: &WishDraft) {
        let wish = match draft.validate() {
            Ok(wish) => wish,
            Err(err) => return self.reject(err),
        };
        if !self.session.is_authenticated() {
            return self.reject(ValidationError::NotSignedIn);
        }
        if self.api.create_wish(&wish).await.is_ok() {
            self.view.notify(Notification::success("Wish posted successfully!"));
            self.view.clear_wish_form();
            self.load_wishes().await;
        }
    }

    pub async fn toggle_like(&self, wish_id: u64) {
        if !self.session.is_authenticated() {
            return self.reject(ValidationError::NotSignedIn);
        }
        if self.api.like_wish(wish_id).await.is_ok() {
            self.view.notify(Notification::success("Wish liked!"));
            self.load_wishes().await;
        }
    }

    pub async fn view_wish_detail(&self, wish_id: u64) {
        if let Ok(wish) = self.api.get_wish(wish_id).await {
            self.view.show_board(render::render_detail(&wish));
        }
    }

    /// Leave the detail view
    pub async fn go_back(&self) {
        self.load_wishes().await;
    }

    /// Commenting is not available yet; signed-in users get a placeholder
    pub fn show_comment_form(&self, wish_id: u64) {
        if !self.session.is_authenticated() {
            return self.reject(ValidationError::NotSignedIn);
        }
        log::debug!("comment form requested for wish {}", wish_id);
        self.view.notify(Notification::info("Comment feature coming soon"));
    }

    /// Route a board click to its action
    pub async fn dispatch(&self, action: BoardAction) {
        match action {
            BoardAction::Like(id) => self.toggle_like(id).await,
            BoardAction::Comment(id) => self.show_comment_form(id),
            BoardAction::View(id) => self.view_wish_detail(id).await,
            BoardAction::Back => self.go_back().await,
        }
    }

    /// Probe `/health` and `/info` for the header badge. Failures stay quiet.
    pub async fn load_service_info(&self) {
        let healthy = self.api.health().await.map(|h| h.is_healthy()).unwrap_or(false);
        let info = self.api.info().await.ok();
        self.view.show_service_status(healthy, info.as_ref());
    }

    fn reject(&self, err: ValidationError) {
        self.view.notify(Notification::error(err.to_string()));
    }
}
