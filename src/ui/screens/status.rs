use {
    crate::{
        app::StatusState,
        config::PAYMENT,
        engine::TxStatus,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            screens::shared::page,
            utils::{format_asset_amount, format_fiat_amount, format_fiat_rate},
        },
        utils::format_date_time,
    },
    eframe::egui::{Align, Context, Layout, ProgressBar, RichText, Ui},
};

const CHECKOUT_WIDTH: f32 = 560.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusAction {
    NewExchange,
}

pub(crate) fn render_status(ctx: &Context, state: &StatusState) -> Option<StatusAction> {
    page(ctx, CHECKOUT_WIDTH, |ui| {
        let action = match state.progress.status() {
            TxStatus::Processing => {
                render_processing(ui, state);
                None
            }
            TxStatus::Completed => render_receipt(ui, state),
        };
        ui.add_space(16.0);
        render_help(ui);
        action
    })
}

fn render_processing(ui: &mut Ui, state: &StatusState) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label_heading(&UI_TEXT.status_processing_title, 24.0);
            ui.label_subdued(&UI_TEXT.status_processing_body);
            ui.add_space(16.0);
            ui.add(
                ProgressBar::new(state.progress.fraction())
                    .fill(UI_CONFIG.colors.primary)
                    .animate(true),
            );
            ui.add_space(4.0);
            ui.label_subdued(format!(
                "{} {}%",
                UI_TEXT.status_progress,
                state.progress.progress()
            ));
        });
    });
}

fn render_receipt(ui: &mut Ui, state: &StatusState) -> Option<StatusAction> {
    let view = &state.view;
    let mut action = None;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&UI_TEXT.status_done_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.success),
            );
            ui.label_subdued(&UI_TEXT.status_done_body);
        });
        ui.add_space(12.0);

        UI_CONFIG.inset_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(2, |cols| {
                cols[0].label_subdued(&UI_TEXT.status_gave);
                cols[0].label(
                    RichText::new(format_fiat_amount(&view.session.from_amount))
                        .size(20.0)
                        .strong(),
                );
                cols[1].label_subdued(&UI_TEXT.status_got);
                cols[1].label(
                    RichText::new(format_asset_amount(view.display_amount()))
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.primary),
                );
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.status_tx_id);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.copy_button("tx_id", &view.transaction_id);
                ui.label(RichText::new(&view.transaction_id).monospace());
            });
        });
        ui.summary_row(&UI_TEXT.status_date, format_date_time(&view.started_at));
        ui.summary_row(
            &UI_TEXT.status_rate,
            RichText::new(format_fiat_rate(view.display_rate())).strong(),
        );
        ui.summary_row(
            &UI_TEXT.status_state,
            RichText::new(&UI_TEXT.status_state_done)
                .strong()
                .color(UI_CONFIG.colors.success),
        );
        ui.add_space(12.0);

        UI_CONFIG.highlight_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_subdued(&UI_TEXT.status_sent_to);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(view.wallet_address())
                        .monospace()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.copy_button("wallet", view.wallet_address());
            });
        });
        ui.add_space(16.0);

        if ui.primary_button(&UI_TEXT.status_new_exchange, true).clicked() {
            action = Some(StatusAction::NewExchange);
        }
    });
    action
}

fn render_help(ui: &mut Ui) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&UI_TEXT.status_help_title).strong());
            ui.label_subdued(&UI_TEXT.status_help_body);
            ui.hyperlink_to(&UI_TEXT.support_contact, PAYMENT.support_url);
        });
    });
}
