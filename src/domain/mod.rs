// Domain types and value objects
mod quote;
mod session;
mod trade;

// Re-export commonly used types to the world
pub use quote::{
    Quote, compute_quote, compute_quote_with, format_markup, parse_fiat_amount, quote_from_input,
};
pub use session::{ExchangeSession, ExchangeSessionPatch};
pub use trade::{LiveTradeEntry, TradeDirection};
