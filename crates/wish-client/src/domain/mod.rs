//! Domain Layer
//!
//! Payloads exchanged with the Wish Wall backend plus the client-only
//! notification record. The server owns the schema; these types only
//! describe what the client reads and sends.

mod wish;
mod auth;
mod notification;
mod service;

pub use wish::{Author, Category, Comment, LikeStatus, NewWish, Wish, WishPage};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use notification::{Notification, NotificationKind};
pub use service::{HealthStatus, ServiceInfo};
