use std::{cell::RefCell, rc::Rc};
use web_sys::{Storage, Window};

/// localStorage key holding the logged-in user's identifier.
pub const SESSION_KEY: &str = "userId";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Where the session identifier lives between page loads.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, user_id: &str) -> Result<(), String>;
    fn clear(&self);
}

/// Session identifier persisted in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(SESSION_KEY)
            .ok()
            .flatten()
            .filter(|id| !id.is_empty())
    }

    fn set(&self, user_id: &str) -> Result<(), String> {
        local_storage()?
            .set_item(SESSION_KEY, user_id)
            .map_err(|_| "Failed to store session".to_string())
    }

    fn clear(&self) {
        match local_storage() {
            Ok(storage) => {
                let _ = storage.remove_item(SESSION_KEY);
            }
            Err(err) => log::warn!("Cannot clear session: {}", err),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_user(user_id: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(user_id.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone().filter(|id| !id.is_empty())
    }

    fn set(&self, user_id: &str) -> Result<(), String> {
        *self.slot.borrow_mut() = Some(user_id.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Cloneable handle shared through Leptos context.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn local() -> Self {
        Self::new(LocalSessionStore)
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
