//! Token Persistence
//!
//! localStorage under the configured key. Private browsing modes can deny
//! storage; the session then lives in memory for the page lifetime.

use web_sys::Storage;
use wish_client::{MemoryTokenStore, TokenStore};

pub enum BrowserTokenStore {
    Local { storage: Storage, key: String },
    Memory(MemoryTokenStore),
}

impl BrowserTokenStore {
    pub fn open(key: &str) -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserTokenStore::Local { storage, key: key.to_string() },
            None => {
                log::warn!("localStorage unavailable, session will not survive a reload");
                BrowserTokenStore::Memory(MemoryTokenStore::new())
            }
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        match self {
            BrowserTokenStore::Local { storage, key } => storage.get_item(key).ok().flatten(),
            BrowserTokenStore::Memory(memory) => memory.load(),
        }
    }

    fn save(&self, token: &str) {
        match self {
            BrowserTokenStore::Local { storage, key } => {
                if storage.set_item(key, token).is_err() {
                    log::warn!("failed to persist session token");
                }
            }
            BrowserTokenStore::Memory(memory) => memory.save(token),
        }
    }

    fn clear(&self) {
        match self {
            BrowserTokenStore::Local { storage, key } => {
                let _ = storage.remove_item(key);
            }
            BrowserTokenStore::Memory(memory) => memory.clear(),
        }
    }
}
