use {
    crate::config::RATES,
    serde_json::Value,
    thiserror::Error,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Error)]
pub enum RateFeedError {
    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response has no usable {0} rate")]
    MissingRate(&'static str),

    #[error("rate worker unavailable: {0}")]
    Worker(String),
}

/// Pull `data.rates.<currency>` out of a Coinbase exchange-rates body.
///
/// Coinbase sends rates as decimal strings; plain numbers are accepted too.
/// Anything non-finite or not strictly positive is rejected.
pub fn parse_coinbase_rate(body: &Value, currency: &str) -> Option<f64> {
    let raw = body.get("data")?.get("rates")?.get(currency)?;
    let rate = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Number(n) => n.as_f64()?,
        _ => return None,
    };
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

fn client() -> Result<reqwest::Client, RateFeedError> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(RATES.request_timeout);
    Ok(builder.build()?)
}

/// One GET against the configured endpoint.
pub async fn fetch_rate() -> Result<f64, RateFeedError> {
    #[cfg(debug_assertions)]
    if DF.log_rate_feed {
        log::info!("[rates] GET {}", RATES.url);
    }

    let body: Value = client()?
        .get(RATES.url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let rate = parse_coinbase_rate(&body, RATES.quote_currency)
        .ok_or(RateFeedError::MissingRate(RATES.quote_currency))?;

    #[cfg(debug_assertions)]
    if DF.log_rate_feed {
        log::info!("[rates] {} per unit: {}", RATES.quote_currency, rate);
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_string_rate() {
        let body = json!({ "data": { "currency": "USDT", "rates": { "KZT": "481.27", "USD": "1.0" } } });
        assert_eq!(parse_coinbase_rate(&body, "KZT"), Some(481.27));
    }

    #[test]
    fn reads_numeric_rate() {
        let body = json!({ "data": { "rates": { "KZT": 479.5 } } });
        assert_eq!(parse_coinbase_rate(&body, "KZT"), Some(479.5));
    }

    #[test]
    fn rejects_missing_or_unusable_rates() {
        assert_eq!(parse_coinbase_rate(&json!({}), "KZT"), None);
        assert_eq!(parse_coinbase_rate(&json!({ "data": { "rates": {} } }), "KZT"), None);
        assert_eq!(
            parse_coinbase_rate(&json!({ "data": { "rates": { "KZT": "abc" } } }), "KZT"),
            None
        );
        assert_eq!(
            parse_coinbase_rate(&json!({ "data": { "rates": { "KZT": "0" } } }), "KZT"),
            None
        );
        assert_eq!(
            parse_coinbase_rate(&json!({ "data": { "rates": { "KZT": "-3" } } }), "KZT"),
            None
        );
        assert_eq!(
            parse_coinbase_rate(&json!({ "data": { "rates": { "KZT": null } } }), "KZT"),
            None
        );
    }
}
