use serde::{Deserialize, Serialize};

/// Working record of one in-flight exchange, threaded through the checkout screens.
/// Serialized with the same camelCase keys the browser mirror has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeSession {
    pub from_amount: String,
    pub to_amount: String,
    pub exchange_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<String>,
}

/// Partial update. Every `Some` field overrides, every `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeSessionPatch {
    pub from_amount: Option<String>,
    pub to_amount: Option<String>,
    pub exchange_rate: Option<f64>,
    pub email: Option<String>,
    pub wallet_address: Option<String>,
    pub effective_rate: Option<f64>,
    pub promo_code: Option<String>,
    pub final_rate: Option<f64>,
    pub final_amount: Option<String>,
}

impl ExchangeSession {
    pub fn new(from_amount: impl Into<String>, to_amount: impl Into<String>, exchange_rate: f64) -> Self {
        Self {
            from_amount: from_amount.into(),
            to_amount: to_amount.into(),
            exchange_rate,
            email: None,
            wallet_address: None,
            effective_rate: None,
            promo_code: None,
            final_rate: None,
            final_amount: None,
        }
    }

    pub fn with_effective_rate(mut self, rate: f64) -> Self {
        self.effective_rate = Some(rate);
        self
    }

    /// Shallow merge: keys present in `patch` win, the rest are retained.
    pub fn merge(&mut self, patch: ExchangeSessionPatch) {
        let ExchangeSessionPatch {
            from_amount,
            to_amount,
            exchange_rate,
            email,
            wallet_address,
            effective_rate,
            promo_code,
            final_rate,
            final_amount,
        } = patch;

        if let Some(v) = from_amount {
            self.from_amount = v;
        }
        if let Some(v) = to_amount {
            self.to_amount = v;
        }
        if let Some(v) = exchange_rate {
            self.exchange_rate = v;
        }
        if email.is_some() {
            self.email = email;
        }
        if wallet_address.is_some() {
            self.wallet_address = wallet_address;
        }
        if effective_rate.is_some() {
            self.effective_rate = effective_rate;
        }
        if promo_code.is_some() {
            self.promo_code = promo_code;
        }
        if final_rate.is_some() {
            self.final_rate = final_rate;
        }
        if final_amount.is_some() {
            self.final_amount = final_amount;
        }
    }

    /// Rate to show the customer: final, then bonus-adjusted, then base.
    pub fn display_rate(&self) -> f64 {
        self.final_rate
            .or(self.effective_rate)
            .unwrap_or(self.exchange_rate)
    }

    /// Rate shown before the exchange is finalised.
    pub fn quoted_rate(&self) -> f64 {
        self.effective_rate.unwrap_or(self.exchange_rate)
    }

    pub fn display_amount(&self) -> &str {
        self.final_amount.as_deref().unwrap_or(&self.to_amount)
    }
}

impl ExchangeSessionPatch {
    pub fn contact(email: impl Into<String>, wallet_address: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            wallet_address: Some(wallet_address.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_mirror_keys_and_omits_absent_fields() {
        let s = ExchangeSession::new("22000", "46.90", 478.5).with_effective_rate(469.12);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fromAmount": "22000",
                "toAmount": "46.90",
                "exchangeRate": 478.5,
                "effectiveRate": 469.12
            })
        );
    }

    #[test]
    fn reads_a_mirror_written_by_the_browser_build() {
        let raw = r#"{"fromAmount":"30000","toAmount":"63.95","exchangeRate":478.5,"walletAddress":"TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE"}"#;
        let s: ExchangeSession = serde_json::from_str(raw).unwrap();
        assert_eq!(s.from_amount, "30000");
        assert_eq!(s.wallet_address.as_deref(), Some("TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE"));
        assert_eq!(s.email, None);
    }

    #[test]
    fn merge_overrides_only_given_keys() {
        let mut s = ExchangeSession::new("22000", "46.01", 478.5);
        s.merge(ExchangeSessionPatch {
            email: Some("a@b.com".into()),
            ..Default::default()
        });
        s.merge(ExchangeSessionPatch {
            final_amount: Some("47.00".into()),
            ..Default::default()
        });
        assert_eq!(s.from_amount, "22000");
        assert_eq!(s.to_amount, "46.01");
        assert_eq!(s.exchange_rate, 478.5);
        assert_eq!(s.email.as_deref(), Some("a@b.com"));
        assert_eq!(s.display_amount(), "47.00");
    }

    #[test]
    fn display_rate_prefers_final_then_effective() {
        let mut s = ExchangeSession::new("22000", "46.90", 478.5);
        assert_eq!(s.display_rate(), 478.5);
        s.effective_rate = Some(469.12);
        assert_eq!(s.display_rate(), 469.12);
        assert_eq!(s.quoted_rate(), 469.12);
        s.final_rate = Some(470.0);
        assert_eq!(s.display_rate(), 470.0);
    }
}
