//! UI Components
//!
//! Leptos components for the auth panel and the main view.

mod auth_panel;
mod header_nav;
mod wish_composer;
mod wish_board;
mod notification_stack;

pub use auth_panel::{AuthPanel, AuthTab};
pub use header_nav::HeaderNav;
pub use wish_composer::WishComposer;
pub use wish_board::WishBoard;
pub use notification_stack::NotificationStack;
