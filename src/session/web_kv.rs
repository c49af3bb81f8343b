// WASM-only code i.e. gated in mod.rs by #[cfg(target_arch = "wasm32")]

use {
    crate::session::{KeyValueStore, StoreError},
    web_sys::Storage,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// `window.sessionStorage`: scoped to the tab, survives reloads.
pub struct WebSessionStore {
    storage: Storage,
}

impl WebSessionStore {
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Backend("no global window".into()))?;
        let storage = window
            .session_storage()
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Backend("sessionStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))?;
        #[cfg(debug_assertions)]
        if DF.log_web_storage {
            log::info!("sessionStorage get {} -> {:?}", key, value);
        }
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}
