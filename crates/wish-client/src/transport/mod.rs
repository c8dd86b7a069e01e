//! Transport Layer
//!
//! Single chokepoint for backend communication.
//! - request: request/response value types and per-call options
//! - traits: the I/O seams (`HttpBackend`, `Feedback`)
//! - client: `ApiClient`, auth header injection and uniform failure handling

mod request;
mod traits;
mod client;

pub use request::{HttpRequest, HttpResponse, Method, RequestOptions};
pub use traits::{Feedback, HttpBackend};
pub use client::ApiClient;
