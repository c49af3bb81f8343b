//! Static bundle + placeholder API server.
//!
//! `cargo run --bin serve -- --spa-dir dist/spa`

use {almasu::server::ServerConfig, clap::Parser};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads the environment.
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env: {}", e);
    }

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("almasu"), my_code_level)
        .filter(Some("serve"), my_code_level)
        .init();

    let config = ServerConfig::parse();
    almasu::server::serve(config).await
}
