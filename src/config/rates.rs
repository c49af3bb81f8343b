use std::time::Duration;

pub struct RateSourceConfig {
    /// Coinbase exchange-rates endpoint, quoted against the asset.
    pub url: &'static str,
    /// Key under `data.rates` holding fiat per asset unit.
    pub quote_currency: &'static str,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    /// Used for quoting until the first successful fetch.
    pub fallback_rate: f64,
}

pub const RATES: RateSourceConfig = RateSourceConfig {
    url: "https://api.coinbase.com/v2/exchange-rates?currency=USDT",
    quote_currency: "KZT",
    refresh_interval: Duration::from_secs(300), // 5 minutes
    request_timeout: Duration::from_secs(10),
    fallback_rate: 478.50,
};
