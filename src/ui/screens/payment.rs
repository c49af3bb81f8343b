use {
    crate::{
        app::PaymentState,
        config::PAYMENT,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            screens::shared::page,
            ui_text::ICON_CHECK,
            utils::{format_asset_amount, format_fiat_amount},
        },
    },
    eframe::egui::{Context, RichText, Ui},
};

const CHECKOUT_WIDTH: f32 = 560.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaymentAction {
    Back,
    Transferred,
}

pub(crate) fn render_payment(ctx: &Context, state: &PaymentState) -> Option<PaymentAction> {
    let due = format_fiat_amount(state.view.amount_due());
    page(ctx, CHECKOUT_WIDTH, |ui| {
        let mut action = None;
        if ui.link_button(&UI_TEXT.payment_back).clicked() {
            action = Some(PaymentAction::Back);
        }
        ui.add_space(12.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label_heading(&UI_TEXT.payment_title, 28.0);
            });
            ui.add_space(12.0);

            UI_CONFIG.inset_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.summary_row(
                    &UI_TEXT.payment_due,
                    RichText::new(&due)
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.summary_row(
                    &UI_TEXT.payment_receive,
                    format_asset_amount(&state.view.session.to_amount),
                );
            });
            ui.add_space(16.0);

            render_card_details(ui);
            ui.add_space(12.0);
            render_instructions(ui, &due);
        });
        ui.add_space(16.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&UI_TEXT.payment_secure_title).strong());
            for point in UI_TEXT.payment_secure_points {
                ui.label(
                    RichText::new(format!("{} {}", ICON_CHECK, point))
                        .small()
                        .color(UI_CONFIG.colors.subdued),
                );
            }
        });
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            ui.label_subdued(format!(
                "{} {}",
                UI_TEXT.payment_processing, PAYMENT.payment_time
            ));
        });
        ui.add_space(12.0);

        let done = format!("{} {}", UI_TEXT.payment_done, due);
        if ui.primary_button(&done, true).clicked() {
            action = Some(PaymentAction::Transferred);
        }
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            ui.label_subdued(&UI_TEXT.payment_trouble);
            ui.hyperlink_to(&UI_TEXT.support_contact, PAYMENT.support_url);
        });
        action
    })
}

fn render_card_details(ui: &mut Ui) {
    UI_CONFIG.highlight_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&UI_TEXT.payment_transfer_title).strong());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(PAYMENT.card_number)
                        .monospace()
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.copy_button("card_number", &PAYMENT.card_number.replace(' ', ""));
            });
            ui.label_subdued(&UI_TEXT.payment_card_caption);
        });
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            cols[0].label_subdued(&UI_TEXT.payment_recipient);
            cols[0].label(RichText::new(PAYMENT.recipient).strong());
            cols[1].label_subdued(&UI_TEXT.payment_bank);
            cols[1].label(RichText::new(PAYMENT.bank).strong());
        });
    });
}

fn render_instructions(ui: &mut Ui, due: &str) {
    UI_CONFIG.inset_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&UI_TEXT.payment_steps_title).strong());
        let steps = [
            UI_TEXT.payment_step_open_app.clone(),
            UI_TEXT.payment_step_choose.clone(),
            format!("{} {}", UI_TEXT.payment_step_card, PAYMENT.card_number),
            format!("{} {}", UI_TEXT.payment_step_amount, due),
            UI_TEXT.payment_step_confirm.clone(),
        ];
        for (i, step) in steps.iter().enumerate() {
            ui.label(
                RichText::new(format!("{}. {}", i + 1, step))
                    .small()
                    .color(UI_CONFIG.colors.label),
            );
        }
    });
}
