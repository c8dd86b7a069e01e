//! Wish Wall Client
//!
//! Target-independent half of the Wish Wall front-end:
//! - session: bearer token lifecycle behind a persistence seam
//! - transport: the single request chokepoint (auth header, 401, notifications)
//! - api: typed wrappers for every backend endpoint
//! - render: pure feed/detail markup
//! - controller: the UI actions, driven through a `ViewPort`
//!
//! The browser crate supplies the I/O halves (fetch, localStorage, DOM).

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod transport;
pub mod api;
pub mod render;
pub mod forms;
pub mod controller;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use controller::{Controller, ViewPort};
pub use domain::{Category, Notification, NotificationKind, ServiceInfo, Wish};
pub use error::{ApiError, ApiResult, ValidationError};
pub use forms::{LoginForm, RegisterForm, WishDraft};
pub use render::BoardAction;
pub use session::{MemoryTokenStore, Session, TokenStore};
pub use transport::{ApiClient, Feedback, HttpBackend, HttpRequest, HttpResponse, Method, RequestOptions};
