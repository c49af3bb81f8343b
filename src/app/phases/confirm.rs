use {
    crate::{
        app::{App, ConfirmState},
        checkout::Route,
        ui::{ConfirmAction, render_confirm},
    },
    eframe::egui::Context,
};

impl super::PhaseView for ConfirmState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route> {
        match render_confirm(ctx, self)? {
            ConfirmAction::Back => Some(Route::Landing),
            ConfirmAction::Submit => self.view.form.submit(&mut app.store),
        }
    }
}
