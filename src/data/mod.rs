mod coinbase;
mod rate_feed;

pub use {
    coinbase::{RateFeedError, fetch_rate, parse_coinbase_rate},
    rate_feed::RateFeed,
};
