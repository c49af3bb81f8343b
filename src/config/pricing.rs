//! Pricing configuration: bonus tiers, reference rate and the minimum order.

/// One step of the bonus ladder.
/// Applies to every reference amount `<= up_to` not claimed by an earlier tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub up_to: f64,
    pub multiplier: f64,
}

/// Ordered tier table. Amounts above the last boundary get `above_max`.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    pub tiers: &'static [Tier],
    pub above_max: f64,
}

pub struct PricingConfig {
    pub tiers: TierTable,
    /// KZT per USD. Only used to classify the order into a tier, never to convert.
    pub reference_rate: f64,
    /// Orders below this (in fiat) can be quoted but not submitted.
    pub min_fiat_amount: f64,
    pub default_fiat_input: &'static str,
    pub fiat_code: &'static str,
    pub fiat_symbol: &'static str,
    pub asset_code: &'static str,
    pub reference_code: &'static str,
}

pub const PRICING: PricingConfig = PricingConfig {
    tiers: TierTable {
        tiers: &[
            Tier { up_to: 1_000.0, multiplier: 1.02 },   // +2%
            Tier { up_to: 3_000.0, multiplier: 1.022 },  // +2.2%
            Tier { up_to: 5_000.0, multiplier: 1.023 },  // +2.3%
            Tier { up_to: 10_000.0, multiplier: 1.025 }, // +2.5%
        ],
        above_max: 1.025,
    },
    reference_rate: 478.50,
    min_fiat_amount: 22_000.0,
    default_fiat_input: "22000",
    fiat_code: "KZT",
    fiat_symbol: "₸",
    asset_code: "USDT",
    reference_code: "USD",
};
