use {
    crate::{
        config::{PRICING, TierTable},
        domain::{Quote, format_markup},
        ui::UI_CONFIG,
        utils::format_grouped,
    },
    eframe::egui::{Context, Ui, Visuals},
};

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.extreme_bg_color = UI_CONFIG.colors.background;
    visuals.selection.bg_fill = UI_CONFIG.colors.primary.linear_multiply(0.5);
    visuals.hyperlink_color = UI_CONFIG.colors.primary;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

/// "478.50 ₸"
pub fn format_fiat_rate(rate: f64) -> String {
    format!("{:.2} {}", rate, PRICING.fiat_symbol)
}

/// "22,000 ₸" for a stored amount string; unparseable text is shown as-is.
pub fn format_fiat_amount(amount: &str) -> String {
    match amount.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => {
            let decimals = if v.fract() == 0.0 { 0 } else { 2 };
            format!("{} {}", format_grouped(v, decimals), PRICING.fiat_symbol)
        }
        _ => format!("{} {}", amount, PRICING.fiat_symbol),
    }
}

pub fn format_asset_amount(amount: &str) -> String {
    format!("{} {}", amount, PRICING.asset_code)
}

/// Markup next to a live quote: "(+2.2%)".
pub fn format_live_markup(quote: &Quote) -> String {
    format!("(+{}%)", quote.markup_display())
}

/// "+2,2%" as written in the tier list.
pub fn format_bonus(multiplier: f64) -> String {
    format!("+{}%", format_markup((multiplier - 1.0) * 100.0).replace('.', ","))
}

/// One `(range, bonus)` line per tier, e.g. ("От 1 000$ до 3 000$", "+2,2%").
pub fn tier_lines(table: &TierTable) -> Vec<(String, String)> {
    let code = "$";
    let mut lower: Option<f64> = None;
    table
        .tiers
        .iter()
        .map(|tier| {
            let upper = format_grouped(tier.up_to, 0).replace(',', " ");
            let range = match lower {
                None => format!("До {}{}", upper, code),
                Some(from) => format!(
                    "От {}{} до {}{}",
                    format_grouped(from, 0).replace(',', " "),
                    code,
                    upper,
                    code
                ),
            };
            lower = Some(tier.up_to);
            (range, format_bonus(tier.multiplier))
        })
        .collect()
}

/// Lay `add_contents` out in a centered column no wider than `max_width`.
pub fn centered_column<R>(ui: &mut Ui, max_width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let width = ui.available_width().min(max_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}
