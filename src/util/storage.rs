//! Browser localStorage access for the saved snapshot.
//!
//! Storage can be missing (privacy mode, quota); every failure here is
//! logged and otherwise treated as "nothing stored". Native builds keep the
//! entries in a per-thread map instead, so the save and reset paths can be
//! exercised without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(not(feature = "csr"))]
use std::cell::RefCell;
#[cfg(not(feature = "csr"))]
use std::collections::HashMap;

#[cfg(not(feature = "csr"))]
thread_local! {
    static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key} failed: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with_borrow(|entries| entries.get(key).cloned())
    }
}

/// Store `value` under `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with_borrow_mut(|entries| entries.insert(key.to_owned(), value.to_owned()));
    }
}

/// Delete `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("localStorage remove of {key} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with_borrow_mut(|entries| entries.remove(key));
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(Some(storage)) => Some(storage),
        Ok(None) => {
            log::warn!("localStorage unavailable");
            None
        }
        Err(e) => {
            log::warn!("localStorage access denied: {e:?}");
            None
        }
    }
}
