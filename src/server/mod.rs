//! Thin HTTP server: the built web bundle plus two placeholder endpoints.

mod api;
mod config;
mod spa;

pub use {
    api::MessageResponse,
    config::ServerConfig,
    spa::{content_type, resolve},
};

use {
    crate::config::SERVER,
    anyhow::Context,
    axum::{Router, middleware, routing::get},
    std::{net::SocketAddr, path::PathBuf, sync::Arc},
    tokio::net::TcpListener,
};

pub(crate) struct ServerState {
    pub(crate) ping_message: String,
    pub(crate) demo_message: &'static str,
    pub(crate) spa_dir: PathBuf,
}

impl ServerState {
    fn entry_document(&self) -> PathBuf {
        self.spa_dir.join(SERVER.entry_document)
    }
}

/// Build the router. In dev mode only `/api` is served.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(ServerState {
        ping_message: config.ping_message.clone(),
        demo_message: SERVER.demo_message,
        spa_dir: config.spa_dir.clone(),
    });

    let api = Router::new()
        .route("/api/ping", get(api::ping))
        .route("/api/demo", get(api::demo))
        .layer(middleware::from_fn(api::allow_any_origin));

    let mut app = Router::new().merge(api);
    if !config.dev {
        app = app.fallback(spa::serve_spa);
    }
    app.with_state(state)
}

pub async fn serve_on(listener: TcpListener, config: &ServerConfig) -> anyhow::Result<()> {
    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped with an error")
}

/// Bind to the configured port on all interfaces and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    if config.dev {
        log::info!("🚀 API listening on http://{} (dev mode, no static files)", addr);
    } else {
        log::info!(
            "🚀 Serving {} on http://{}",
            config.spa_dir.display(),
            addr
        );
    }
    serve_on(listener, &config).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
