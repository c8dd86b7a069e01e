//! Browser Implementations
//!
//! The I/O halves of the client seams: fetch, localStorage and the
//! store-backed view.

mod fetch;
mod storage;
mod view;

pub use fetch::FetchBackend;
pub use storage::BrowserTokenStore;
pub use view::StoreView;
