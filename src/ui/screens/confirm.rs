use {
    crate::{
        app::ConfirmState,
        config::PAYMENT,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            screens::shared::page,
            utils::{format_asset_amount, format_fiat_amount, format_fiat_rate},
        },
    },
    eframe::egui::{Context, RichText, TextEdit, TextStyle, Ui},
};

const CHECKOUT_WIDTH: f32 = 560.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmAction {
    Back,
    Submit,
}

pub(crate) fn render_confirm(ctx: &Context, state: &mut ConfirmState) -> Option<ConfirmAction> {
    page(ctx, CHECKOUT_WIDTH, |ui| {
        let mut action = None;
        if ui.link_button(&UI_TEXT.back).clicked() {
            action = Some(ConfirmAction::Back);
        }
        ui.add_space(12.0);

        render_summary(ui, state);
        ui.add_space(16.0);

        if render_contact_form(ui, state) {
            action = Some(ConfirmAction::Submit);
        }
        ui.add_space(16.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&UI_TEXT.confirm_safe_title).strong());
            ui.label_subdued(&UI_TEXT.confirm_safe_body);
        });
        action
    })
}

fn render_summary(ui: &mut Ui, state: &ConfirmState) {
    let session = &state.view.session;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label_heading(&UI_TEXT.confirm_title, 24.0);
        });
        ui.add_space(12.0);

        UI_CONFIG.inset_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(2, |cols| {
                cols[0].label_subdued(&UI_TEXT.calc_give);
                cols[0].label(
                    RichText::new(format_fiat_amount(&session.from_amount))
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                cols[1].label_subdued(&UI_TEXT.calc_get);
                cols[1].label(
                    RichText::new(format_asset_amount(&session.to_amount))
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.primary),
                );
            });
        });
        ui.add_space(8.0);

        ui.summary_row(
            &UI_TEXT.confirm_rate,
            RichText::new(format_fiat_rate(state.view.quoted_rate())).strong(),
        );
        ui.summary_row(
            &UI_TEXT.confirm_commission,
            RichText::new(PAYMENT.commission).color(UI_CONFIG.colors.success),
        );
        ui.summary_row(&UI_TEXT.confirm_processing, PAYMENT.processing_time);
        ui.summary_row(
            &UI_TEXT.confirm_status,
            RichText::new(&UI_TEXT.confirm_status_active).color(UI_CONFIG.colors.success),
        );
    });
}

/// Returns true when the confirm button was clicked.
fn render_contact_form(ui: &mut Ui, state: &mut ConfirmState) -> bool {
    let form = &mut state.view.form;
    let mut submitted = false;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_heading(&UI_TEXT.confirm_contact_title, 18.0);
        ui.add_space(8.0);

        ui.label_subdued(&UI_TEXT.confirm_email);
        ui.add(
            TextEdit::singleline(&mut form.email)
                .hint_text(&UI_TEXT.confirm_email_hint)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.label_subdued(&UI_TEXT.confirm_wallet);
        ui.add(
            TextEdit::singleline(&mut form.wallet_address)
                .hint_text(&UI_TEXT.confirm_wallet_hint)
                .font(TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
        if form.show_wallet_error() {
            ui.label(
                RichText::new(&UI_TEXT.confirm_required)
                    .small()
                    .color(UI_CONFIG.colors.error),
            );
        }
        ui.add_space(8.0);

        ui.checkbox(&mut form.agreed, RichText::new(&UI_TEXT.confirm_agreement).small());
        ui.add_space(12.0);

        if ui
            .primary_button(&UI_TEXT.confirm_submit, form.can_submit())
            .clicked()
        {
            submitted = true;
        }
    });
    submitted
}
