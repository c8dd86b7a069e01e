//! Session
//!
//! The one process-wide piece of mutable state: the bearer token. It is
//! restored from persistence once at startup and then changed only
//! through `sign_in` / `sign_out`, which keep memory and storage in step.

use std::cell::RefCell;
use std::rc::Rc;

/// Persistence seam for the token (localStorage in the browser)
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory token store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }

    pub fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

pub struct Session {
    token: RefCell<Option<String>>,
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Construct from persisted state; the store is read exactly once here
    pub fn restore(store: impl TokenStore + 'static) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        if token.is_some() {
            log::debug!("restored persisted session");
        }
        Self {
            token: RefCell::new(token),
            store: Box::new(store),
        }
    }

    /// Current token, read at call time
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// `Authorization` header value, if signed in
    pub fn authorization(&self) -> Option<String> {
        self.token.borrow().as_ref().map(|t| format!("Bearer {}", t))
    }

    pub fn sign_in(&self, token: String) {
        self.store.save(&token);
        *self.token.borrow_mut() = Some(token);
    }

    pub fn sign_out(&self) {
        *self.token.borrow_mut() = None;
        self.store.clear();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
