//! Session mirror persistence configuration

pub struct SessionPersistenceConfig {
    /// Single key under which the serialized exchange session lives.
    pub key: &'static str,
    /// Native only: JSON file standing in for the browser's session storage.
    pub native_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub session: SessionPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    session: SessionPersistenceConfig {
        key: "exchange_data",
        native_path: ".session.json",
    },
};
