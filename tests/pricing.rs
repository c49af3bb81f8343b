use almasu::{
    config::PRICING,
    domain::{compute_quote, format_markup, parse_fiat_amount, quote_from_input},
};

const RATE: f64 = 478.50;

fn quote(input: &str) -> (String, String, String) {
    let q = quote_from_input(input, RATE);
    (q.output_display(), q.effective_rate_display(), q.markup_display())
}

#[test]
fn each_tier_applies_its_bonus() {
    assert_eq!(quote("22000"), ("46.90".into(), "469.12".into(), "2".into()));
    assert_eq!(quote("1000000"), ("2135.84".into(), "468.20".into(), "2.2".into()));
    assert_eq!(quote("2000000"), ("4275.86".into(), "467.74".into(), "2.3".into()));
    assert_eq!(quote("3000000"), ("6426.33".into(), "466.83".into(), "2.5".into()));
}

#[test]
fn bonus_is_capped_above_last_tier() {
    assert_eq!(quote("10000000").2, "2.5");
    assert_eq!(quote_from_input("10000000", RATE).tier_multiplier, PRICING.tiers.above_max);
}

#[test]
fn tier_boundary_belongs_to_lower_tier() {
    assert_eq!(quote_from_input("478500", RATE).tier_multiplier, 1.02);
    assert_eq!(quote_from_input("478501", RATE).tier_multiplier, 1.022);
}

#[test]
fn tier_follows_reference_rate_not_live_rate() {
    // A much weaker live rate changes the output but not the tier.
    let q = compute_quote(22_000.0, 600.0, RATE);
    assert_eq!(q.tier_multiplier, 1.02);
    assert_eq!(q.output_display(), "37.40");
}

#[test]
fn garbage_input_quotes_zero() {
    for input in ["", "abc", "-500", "  "] {
        let q = quote_from_input(input, RATE);
        assert_eq!(q.input_fiat_amount, 0.0, "input {:?}", input);
        assert_eq!(q.output_display(), "0.00");
        assert_eq!(q.markup_display(), "2");
    }
}

#[test]
fn leading_number_is_kept() {
    assert_eq!(parse_fiat_amount("22000abc"), 22_000.0);
    assert_eq!(parse_fiat_amount(" 1.5e3"), 1_500.0);
}

#[test]
fn unusable_rate_gives_placeholder() {
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let q = quote_from_input("22000", rate);
        assert!(q.is_placeholder());
        assert_eq!(q.output_display(), "0.00");
        assert_eq!(q.effective_rate_display(), "0.00");
    }
}

#[test]
fn markup_formatting_drops_trailing_zero() {
    assert_eq!(format_markup(2.0), "2");
    assert_eq!(format_markup(2.5), "2.5");
    assert_eq!(format_markup(2.2000000000000046), "2.2");
}
