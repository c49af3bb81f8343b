mod kv;
mod store;

#[cfg(not(target_arch = "wasm32"))]
mod file_kv;

#[cfg(target_arch = "wasm32")]
mod web_kv;

pub use {
    kv::{KeyValueStore, MemoryStore, StoreError},
    store::SessionStore,
};

#[cfg(not(target_arch = "wasm32"))]
pub use file_kv::FileStore;

#[cfg(target_arch = "wasm32")]
pub use web_kv::WebSessionStore;

/// The store type the app runs with: whichever mirror the platform offers.
pub type AppSessionStore = SessionStore<Box<dyn KeyValueStore>>;

/// Open the platform mirror, falling back to memory if it is unavailable.
pub fn open_app_store() -> AppSessionStore {
    #[cfg(not(target_arch = "wasm32"))]
    let mirror: Box<dyn KeyValueStore> = Box::new(FileStore::new(
        crate::config::PERSISTENCE.session.native_path,
    ));

    #[cfg(target_arch = "wasm32")]
    let mirror: Box<dyn KeyValueStore> = match WebSessionStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("sessionStorage unavailable, session will not survive reloads: {}", e);
            Box::new(MemoryStore::new())
        }
    };

    SessionStore::new(mirror)
}
