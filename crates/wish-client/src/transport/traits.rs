//! Transport Seams
//!
//! Abstract interfaces the transport talks through. The browser crate
//! implements them with fetch and Leptos state; tests use fakes.

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse};
use crate::domain::Notification;
use crate::error::ApiError;

/// Performs one HTTP exchange
///
/// Must only fail for transport-level problems (`ApiError::Transport`);
/// any status code, 401 included, is returned as an `HttpResponse`.
#[async_trait(?Send)]
pub trait HttpBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Side channels the transport may trigger
pub trait Feedback {
    /// Show a transient notification
    fn notify(&self, notification: Notification);

    /// Switch to the logged-out view
    fn show_login(&self);
}
