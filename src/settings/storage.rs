//! Key-value persistence backend for the settings blob.
//!
//! On wasm this is browser `localStorage`; storage being unavailable or
//! throwing (private browsing, quota) degrades to a silent no-op. On native
//! builds a thread-local map stands in so store semantics stay testable.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(crate) fn get(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub(crate) fn set(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub(crate) fn remove(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use native::{get, remove, set};
