#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod checkout;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the serve binary and integration tests)
pub use app::App;
pub use checkout::Route;
pub use domain::{ExchangeSession, ExchangeSessionPatch, Quote, quote_from_input};
pub use session::{AppSessionStore, MemoryStore, SessionStore};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the Coinbase rate feed and quote against the fallback rate
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Forget any exchange session left over from a previous run
    #[arg(long, default_value_t = false)]
    pub reset_session: bool,

    /// Path to open on launch, e.g. /confirm (guards still apply)
    #[arg(long, default_value = "/")]
    pub start: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
