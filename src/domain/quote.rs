use crate::{
    config::{PRICING, TierTable},
    utils::parse_leading_f64,
};

impl TierTable {
    /// First tier whose boundary the amount does not exceed; anything past the
    /// last boundary gets the capped `above_max` multiplier.
    pub fn multiplier_for(&self, reference_amount: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| reference_amount <= tier.up_to)
            .map(|tier| tier.multiplier)
            .unwrap_or(self.above_max)
    }
}

/// Result of one calculator run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub input_fiat_amount: f64,
    pub base_rate: f64,
    /// Input expressed in the reference currency. Only drives tier selection.
    pub reference_amount: f64,
    pub tier_multiplier: f64,
    /// Fiat per asset unit after the bonus.
    pub effective_rate: f64,
    pub output_asset_amount: f64,
    pub markup_percent: f64,
}

impl Quote {
    pub fn output_display(&self) -> String {
        format!("{:.2}", self.output_asset_amount)
    }

    pub fn effective_rate_display(&self) -> String {
        format!("{:.2}", self.effective_rate)
    }

    /// One decimal, with a trailing ".0" dropped: 1.025 -> "2.5", 1.02 -> "2".
    pub fn markup_display(&self) -> String {
        format_markup(self.markup_percent)
    }

    /// True when the base rate was unusable and the amounts are placeholders.
    pub fn is_placeholder(&self) -> bool {
        !(self.base_rate.is_finite() && self.base_rate > 0.0)
    }
}

pub fn format_markup(percent: f64) -> String {
    let s = format!("{:.1}", percent);
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

/// Coerce user input the way the amount field does: leading number or zero.
/// Negative and non-finite values also become zero.
pub fn parse_fiat_amount(text: &str) -> f64 {
    match parse_leading_f64(text) {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Quote `input_fiat_amount` against `base_rate`, selecting the bonus tier from
/// the amount converted at `reference_rate`.
///
/// Never fails: a bad input amount is treated as zero and an unusable base rate
/// produces a zero placeholder quote.
pub fn compute_quote(input_fiat_amount: f64, base_rate: f64, reference_rate: f64) -> Quote {
    compute_quote_with(&PRICING.tiers, input_fiat_amount, base_rate, reference_rate)
}

pub fn compute_quote_with(
    table: &TierTable,
    input_fiat_amount: f64,
    base_rate: f64,
    reference_rate: f64,
) -> Quote {
    let input = if input_fiat_amount.is_finite() && input_fiat_amount > 0.0 {
        input_fiat_amount
    } else {
        0.0
    };

    let reference_amount = if reference_rate.is_finite() && reference_rate > 0.0 {
        input / reference_rate
    } else {
        0.0
    };
    let tier_multiplier = table.multiplier_for(reference_amount);
    let markup_percent = (tier_multiplier - 1.0) * 100.0;

    let (effective_rate, output_asset_amount) = if base_rate.is_finite() && base_rate > 0.0 {
        (base_rate / tier_multiplier, (input / base_rate) * tier_multiplier)
    } else {
        (0.0, 0.0)
    };

    Quote {
        input_fiat_amount: input,
        base_rate,
        reference_amount,
        tier_multiplier,
        effective_rate,
        output_asset_amount,
        markup_percent,
    }
}

/// Convenience for the amount field: parse the raw text then quote it.
pub fn quote_from_input(text: &str, base_rate: f64) -> Quote {
    compute_quote(parse_fiat_amount(text), base_rate, PRICING.reference_rate)
}
