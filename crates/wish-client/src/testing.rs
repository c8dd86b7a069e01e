//! Test Doubles
//!
//! Scripted HTTP backend and a view that records what it was asked to do.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::controller::ViewPort;
use crate::domain::{Notification, ServiceInfo};
use crate::error::ApiError;
use crate::transport::{Feedback, HttpBackend, HttpRequest, HttpResponse};

#[derive(Default)]
struct BackendState {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

/// Replays queued responses in order and records every request.
/// Clones share state.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.state.borrow_mut().responses.push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpBackend for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        let url = request.url.clone();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no scripted response for {}", url))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

#[derive(Default)]
struct ViewLog {
    screen: Option<Screen>,
    notifications: Vec<Notification>,
    board: Option<String>,
    form_clears: usize,
    service: Option<(bool, Option<ServiceInfo>)>,
}

#[derive(Clone, Default)]
pub struct RecordingView {
    log: Rc<RefCell<ViewLog>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Option<Screen> {
        self.log.borrow().screen
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().notifications.clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.log.borrow().notifications.last().map(|n| n.message.clone())
    }

    pub fn board(&self) -> Option<String> {
        self.log.borrow().board.clone()
    }

    pub fn form_clears(&self) -> usize {
        self.log.borrow().form_clears
    }

    pub fn service(&self) -> Option<(bool, Option<ServiceInfo>)> {
        self.log.borrow().service.clone()
    }
}

impl Feedback for RecordingView {
    fn notify(&self, notification: Notification) {
        self.log.borrow_mut().notifications.push(notification);
    }

    fn show_login(&self) {
        self.log.borrow_mut().screen = Some(Screen::Login);
    }
}

impl ViewPort for RecordingView {
    fn show_main(&self) {
        self.log.borrow_mut().screen = Some(Screen::Main);
    }

    fn show_board(&self, markup: String) {
        self.log.borrow_mut().board = Some(markup);
    }

    fn clear_wish_form(&self) {
        self.log.borrow_mut().form_clears += 1;
    }

    fn show_service_status(&self, healthy: bool, info: Option<&ServiceInfo>) {
        self.log.borrow_mut().service = Some((healthy, info.cloned()));
    }
}
