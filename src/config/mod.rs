//! Configuration module for the exchange application.

// Can all be private now because we have a public re-export.
mod debug;
mod payment;
mod persistence;
mod pricing;
mod rates;
mod server;
mod simulation;

// Re-export commonly used items
pub use debug::DF;
pub use payment::PAYMENT;
pub use persistence::PERSISTENCE;
pub use pricing::{PRICING, Tier, TierTable};
pub use rates::RATES;
pub use server::SERVER;
pub use simulation::SIMULATION;
