//! Client-side key/value persistence.
//!
//! Everything the site remembers between visits goes through
//! [`KeyValueStore`]. Failures are swallowed: a blocked or full
//! `localStorage` behaves like an empty one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::window;

pub const THEME_KEY: &str = "theme";
pub const THEME_PREFERENCE_KEY: &str = "themePreference";
pub const LAST_SUNSET_CHECK_KEY: &str = "lastSunsetCheck";
pub const ACCESSIBILITY_KEY: &str = "accessibility-settings";

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store, used when the browser denies `localStorage`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match window().and_then(|w| w.local_storage().ok()).flatten() {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, preferences will not survive a reload");
                BrowserStorage::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            BrowserStorage::Local(storage) => {
                let _ = storage.set_item(key, value);
            }
            BrowserStorage::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            BrowserStorage::Local(storage) => {
                let _ = storage.remove_item(key);
            }
            BrowserStorage::Memory(store) => store.remove(key),
        }
    }
}
