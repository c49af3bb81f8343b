use {
    crate::{
        app::LandingState,
        checkout::can_proceed,
        config::PRICING,
        ui::{
            DirectionColor, UI_CONFIG, UI_TEXT, UiStyleExt,
            screens::shared::{card_grid, page, render_footer, section_title},
            ui_text::{ICON_DOT, ICON_STAR},
            utils::{format_bonus, format_fiat_rate, format_live_markup, tier_lines},
        },
        utils::{format_clock, format_grouped},
    },
    eframe::egui::{Align, Context, Layout, RichText, TextEdit, TextStyle, Ui},
};

/// What the user did on the landing page this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LandingAction {
    InputChanged,
    StartExchange,
}

pub(crate) fn render_landing(ctx: &Context, state: &mut LandingState) -> Option<LandingAction> {
    page(ctx, UI_CONFIG.layout.max_content_width, |ui| {
        render_hero(ui);
        ui.add_space(UI_CONFIG.layout.section_gap);

        let wide = ui.available_width() >= UI_CONFIG.layout.two_column_min_width;
        let mut action = None;
        if wide {
            ui.columns(2, |cols| {
                action = render_calculator(&mut cols[0], state);
                render_live_trades(&mut cols[1], state);
            });
        } else {
            action = render_calculator(ui, state);
            ui.add_space(16.0);
            render_live_trades(ui, state);
        }

        ui.add_space(UI_CONFIG.layout.section_gap);
        render_stats(ui);
        ui.add_space(UI_CONFIG.layout.section_gap);
        render_testimonials(ui, wide);
        ui.add_space(UI_CONFIG.layout.section_gap);
        render_partners(ui, wide);
        ui.add_space(UI_CONFIG.layout.section_gap);
        render_footer(ui);
        action
    })
}

fn render_hero(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label_heading(&UI_TEXT.hero_title, 40.0);
        ui.label(
            RichText::new(&UI_TEXT.hero_pair)
                .size(40.0)
                .strong()
                .color(UI_CONFIG.colors.primary),
        );
        ui.add_space(8.0);
        ui.label_subdued(&UI_TEXT.hero_body);
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for badge in [
                &UI_TEXT.badge_security,
                &UI_TEXT.badge_instant,
                &UI_TEXT.badge_support,
            ] {
                ui.label(RichText::new(badge).color(UI_CONFIG.colors.label));
                ui.add_space(16.0);
            }
        });
    });
}

fn render_calculator(ui: &mut Ui, state: &mut LandingState) -> Option<LandingAction> {
    let mut action = None;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_heading(&UI_TEXT.calc_title, 22.0);
        ui.label_subdued(&UI_TEXT.calc_subtitle);
        ui.add_space(16.0);

        // Amount in
        ui.label_subdued(&UI_TEXT.calc_give);
        UI_CONFIG.inset_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let edit = TextEdit::singleline(&mut state.input)
                    .font(TextStyle::Heading)
                    .frame(false)
                    .desired_width(ui.available_width() - 60.0);
                if ui.add(edit).changed() {
                    action = Some(LandingAction::InputChanged);
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(PRICING.fiat_code).strong());
                });
            });
        });
        ui.add_space(8.0);

        // Amount out
        ui.label_subdued(&UI_TEXT.calc_get);
        UI_CONFIG.inset_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(state.quote.output_display())
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(PRICING.asset_code).strong());
                    ui.label(
                        RichText::new(format_live_markup(&state.quote))
                            .small()
                            .color(UI_CONFIG.colors.success),
                    );
                });
            });
        });
        ui.add_space(16.0);

        let enabled = can_proceed(&state.input);
        if ui.primary_button(&UI_TEXT.calc_start, enabled).clicked() {
            action = Some(LandingAction::StartExchange);
        }
        let hint_color = if enabled {
            UI_CONFIG.colors.subdued
        } else {
            UI_CONFIG.colors.error
        };
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&UI_TEXT.calc_min_amount).small().color(hint_color));
        });
        ui.add_space(12.0);

        let current = match state.feed.current() {
            Some(rate) => format_fiat_rate(rate),
            None => UI_TEXT.calc_loading.clone(),
        };
        let bonus = if state.quote.is_placeholder() {
            UI_TEXT.calc_no_value.clone()
        } else {
            format!(
                "{} {} {}",
                state.quote.effective_rate_display(),
                PRICING.fiat_symbol,
                format_live_markup(&state.quote)
            )
        };
        ui.summary_row(&UI_TEXT.calc_current_rate, RichText::new(current).strong());
        ui.summary_row(
            &UI_TEXT.calc_bonus_rate,
            RichText::new(bonus).strong().color(UI_CONFIG.colors.success),
        );

        ui.add_space(12.0);
        ui.label(RichText::new(&UI_TEXT.calc_tiers_title).strong());
        let active = state.quote.tier_multiplier;
        for (range, bonus) in tier_lines(&PRICING.tiers) {
            let is_active = bonus == format_bonus(active);
            ui.horizontal(|ui| {
                let color = if is_active {
                    UI_CONFIG.colors.heading
                } else {
                    UI_CONFIG.colors.subdued
                };
                ui.label(RichText::new(range).small().color(color));
                ui.label(RichText::new(bonus).small().color(UI_CONFIG.colors.success));
            });
        }
    });
    action
}

fn render_live_trades(ui: &mut Ui, state: &LandingState) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label_heading(&UI_TEXT.trades_title, 18.0);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&UI_TEXT.trades_live).small().color(UI_CONFIG.colors.subdued));
                ui.label(RichText::new(ICON_DOT).small().color(UI_CONFIG.colors.success));
            });
        });
        ui.add_space(12.0);

        for (i, trade) in state.ticker.entries().enumerate() {
            let frame = if i == 0 {
                UI_CONFIG.highlight_frame()
            } else {
                UI_CONFIG.row_frame()
            };
            frame.show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                format_grouped(trade.amount, 2),
                                PRICING.asset_code
                            ))
                            .strong(),
                        );
                        ui.label(
                            RichText::new(format_clock(&trade.timestamp))
                                .small()
                                .color(UI_CONFIG.colors.subdued),
                        );
                    });
                    ui.with_layout(Layout::top_down(Align::Max), |ui| {
                        ui.label(RichText::new(format_fiat_rate(trade.rate)).strong());
                        ui.label(
                            RichText::new(trade.direction.to_string())
                                .small()
                                .color(trade.direction.color()),
                        );
                    });
                });
            });
            ui.add_space(6.0);
        }
    });
}

fn render_stats(ui: &mut Ui) {
    card_grid(ui, UI_TEXT.stats.len(), UI_TEXT.stats.len(), |ui, idx| {
        let (value, caption) = UI_TEXT.stats[idx];
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value)
                        .size(34.0)
                        .strong()
                        .color(UI_CONFIG.colors.primary),
                );
                ui.label_subdued(caption);
            });
        });
    });
}

fn render_testimonials(ui: &mut Ui, wide: bool) {
    section_title(ui, &UI_TEXT.testimonials_title);
    let per_row = if wide { 3 } else { 1 };
    card_grid(ui, UI_TEXT.testimonials.len(), per_row, |ui, idx| {
        let (name, text) = UI_TEXT.testimonials[idx];
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(ICON_STAR.repeat(5)).color(UI_CONFIG.colors.primary));
            ui.add_space(6.0);
            ui.label(RichText::new(text).color(UI_CONFIG.colors.label));
            ui.add_space(6.0);
            ui.label(RichText::new(name).strong().color(UI_CONFIG.colors.heading));
        });
    });
}

fn render_partners(ui: &mut Ui, wide: bool) {
    section_title(ui, &UI_TEXT.partners_title);
    let per_row = if wide { 4 } else { 2 };
    card_grid(ui, UI_TEXT.partners.len(), per_row, |ui, idx| {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.partners[idx])
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.primary.linear_multiply(0.8)),
                );
            });
        });
    });
}
