//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit verbose logging for rate fetches (requests, parsed values, failures).
    pub log_rate_feed: bool,

    /// Log every session store operation (set/update/clear and mirror reads).
    pub log_session: bool,

    /// Log synthetic trade generation and the delay drawn for the next one.
    pub log_trade_ticker: bool,

    /// Screen transitions and guard redirects.
    pub log_navigation: bool,

    /// Progress ticks on the transaction status screen.
    pub log_progress: bool,

    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    pub log_web_storage: bool,
}

pub const DF: LogFlags = LogFlags {
    log_navigation: true,
    log_session: true,

    log_rate_feed: false,
    log_trade_ticker: false,
    log_progress: false,

    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    log_web_storage: false,
};
