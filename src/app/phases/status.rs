use {
    crate::{
        app::{App, StatusState, phases::phase_view::repaint_for},
        checkout::{Route, start_new_exchange},
        ui::{StatusAction, render_status},
        utils::AppInstant,
    },
    eframe::egui::Context,
};

impl super::PhaseView for StatusState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route> {
        let now = AppInstant::now();
        self.progress.poll(now);

        let next = match render_status(ctx, self) {
            Some(StatusAction::NewExchange) => Some(start_new_exchange(&mut app.store)),
            None => None,
        };

        repaint_for(ctx, [self.progress.time_until_next(now)]);
        next
    }
}
