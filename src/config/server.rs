pub struct ServerDefaults {
    pub port: u16,
    /// Where the built WASM bundle (index.html + pkg) lives.
    pub spa_dir: &'static str,
    pub entry_document: &'static str,
    pub ping_message: &'static str,
    pub demo_message: &'static str,
}

pub const SERVER: ServerDefaults = ServerDefaults {
    port: 8080,
    spa_dir: "dist/spa",
    entry_document: "index.html",
    ping_message: "ping",
    demo_message: "Hello from the exchange server",
};
