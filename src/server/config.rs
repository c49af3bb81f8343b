use {crate::config::SERVER, clap::Parser, std::path::PathBuf};

/// Options for the static bundle + placeholder API server.
///
/// Every flag can also come from the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Serve the exchange web bundle", long_about = None)]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value_t = SERVER.port)]
    pub port: u16,

    /// Directory holding the built bundle (index.html, .wasm, .js)
    #[arg(long, env = "SPA_DIR", default_value = SERVER.spa_dir)]
    pub spa_dir: PathBuf,

    /// Skip static serving; a dev server provides the bundle instead
    #[arg(long = "dev", env = "APP_DEV", default_value_t = false)]
    pub dev: bool,

    #[arg(long, env = "PING_MESSAGE", default_value = SERVER.ping_message)]
    pub ping_message: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: SERVER.port,
            spa_dir: PathBuf::from(SERVER.spa_dir),
            dev: false,
            ping_message: SERVER.ping_message.to_string(),
        }
    }
}
