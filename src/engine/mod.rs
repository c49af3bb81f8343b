// Timer-driven simulations owned by the screens
mod progress;
mod timer;
mod trade_ticker;

pub use {
    progress::{ProgressSimulation, TxStatus},
    timer::{CancelToken, JitterTimer, RepeatingTimer, TimerScope},
    trade_ticker::TradeTicker,
};
