use crate::{
    config::PERSISTENCE,
    domain::{ExchangeSession, ExchangeSessionPatch},
    session::KeyValueStore,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Holds the single in-flight exchange and keeps it mirrored to `S`.
///
/// The in-memory copy is authoritative; the mirror exists so a reload can pick
/// the exchange back up. Mirror failures are logged and otherwise ignored.
pub struct SessionStore<S: KeyValueStore> {
    mirror: S,
    key: &'static str,
    current: Option<ExchangeSession>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(mirror: S) -> Self {
        Self::with_key(mirror, PERSISTENCE.session.key)
    }

    pub fn with_key(mirror: S, key: &'static str) -> Self {
        Self {
            mirror,
            key,
            current: None,
        }
    }

    /// Replace the held session wholesale and write it through.
    pub fn set(&mut self, session: ExchangeSession) {
        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!(
                "SESSION SET [{}]: {} -> {}",
                self.key,
                session.from_amount,
                session.to_amount
            );
        }
        self.persist(&session);
        self.current = Some(session);
    }

    /// In-memory copy if present, else one read-through from the mirror.
    pub fn get(&mut self) -> Option<ExchangeSession> {
        if self.current.is_none() {
            self.current = self.read_mirror();
        }
        self.current.clone()
    }

    /// Shallow-merge `patch` into the held session and re-persist.
    ///
    /// Does nothing (returns `false`) when no session is held in memory, even if
    /// the mirror has one: callers are expected to `get()` first.
    pub fn update(&mut self, patch: ExchangeSessionPatch) -> bool {
        let Some(session) = self.current.as_mut() else {
            #[cfg(debug_assertions)]
            if DF.log_session {
                log::info!("SESSION UPDATE dropped: no session in memory");
            }
            return false;
        };
        session.merge(patch);
        let merged = session.clone();
        self.persist(&merged);
        true
    }

    /// Forget the session in memory and in the mirror.
    pub fn clear(&mut self) {
        self.current = None;
        if let Err(e) = self.mirror.remove(self.key) {
            log::warn!("Failed to clear session mirror: {}", e);
        }
        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!("SESSION CLEARED");
        }
    }

    pub fn mirror(&self) -> &S {
        &self.mirror
    }

    fn persist(&mut self, session: &ExchangeSession) {
        let json = match serde_json::to_string(session) {
            Ok(j) => j,
            Err(e) => {
                log::error!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = self.mirror.set(self.key, &json) {
            log::warn!("Failed to write session mirror: {}", e);
        }
    }

    fn read_mirror(&self) -> Option<ExchangeSession> {
        let raw = match self.mirror.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read session mirror: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => {
                #[cfg(debug_assertions)]
                if DF.log_session {
                    log::info!("SESSION RESTORED from mirror");
                }
                Some(session)
            }
            Err(e) => {
                log::warn!("Ignoring unreadable session mirror: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn sample() -> ExchangeSession {
        ExchangeSession::new("22000", "46.01", 478.5)
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.set(sample());
        assert_eq!(store.get(), Some(sample()));
    }

    #[test]
    fn clear_then_get_is_absent() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.set(sample());
        store.clear();
        assert_eq!(store.get(), None);
        assert!(store.mirror().is_empty());
    }

    #[test]
    fn update_on_cold_store_is_dropped() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.clear();
        let applied = store.update(ExchangeSessionPatch {
            email: Some("x".into()),
            ..Default::default()
        });
        assert!(!applied);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn update_merges_and_re_persists() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.set(sample());
        assert!(store.update(ExchangeSessionPatch {
            email: Some("a@b.com".into()),
            ..Default::default()
        }));

        let mut expected = sample();
        expected.email = Some("a@b.com".into());
        assert_eq!(store.get(), Some(expected.clone()));

        // A fresh store over the same mirror sees the merged record.
        let mut reloaded = SessionStore::new(store.mirror().clone());
        assert_eq!(reloaded.get(), Some(expected));
    }

    #[test]
    fn update_ignores_mirror_until_get_warms_the_cache() {
        let mut mirror = MemoryStore::new();
        mirror
            .set(PERSISTENCE.session.key, &serde_json::to_string(&sample()).unwrap())
            .unwrap();
        let mut store = SessionStore::new(mirror);

        assert!(!store.update(ExchangeSessionPatch::contact("a@b.com", "T1")));
        assert_eq!(store.get(), Some(sample()));
        assert!(store.update(ExchangeSessionPatch::contact("a@b.com", "T1")));
        assert_eq!(store.get().and_then(|s| s.wallet_address).as_deref(), Some("T1"));
    }

    #[test]
    fn corrupt_mirror_reads_as_absent() {
        let mut mirror = MemoryStore::new();
        mirror.set(PERSISTENCE.session.key, "{broken").unwrap();
        let mut store = SessionStore::new(mirror);
        assert_eq!(store.get(), None);
    }
}
