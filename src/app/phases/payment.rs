use {
    crate::{
        app::{App, PaymentState},
        checkout::Route,
        ui::{PaymentAction, render_payment},
    },
    eframe::egui::Context,
};

impl super::PhaseView for PaymentState {
    fn tick(&mut self, _app: &mut App, ctx: &Context) -> Option<Route> {
        match render_payment(ctx, self)? {
            PaymentAction::Back => Some(Route::Confirm),
            PaymentAction::Transferred => Some(self.view.confirm_transfer()),
        }
    }
}
