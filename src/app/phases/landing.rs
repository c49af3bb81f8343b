use {
    crate::{
        app::{App, LandingState, phases::phase_view::repaint_for},
        checkout::{Route, start_exchange},
        ui::{LandingAction, render_landing},
        utils::{AppInstant, now_local},
    },
    eframe::egui::Context,
};

#[cfg(debug_assertions)]
use crate::config::DF;

impl super::PhaseView for LandingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route> {
        let now = AppInstant::now();

        if let Some(rate) = self.feed.poll(now) {
            app.last_rate = Some(rate);
            self.requote();
            if self.ticker.seed(rate, now_local()) {
                #[cfg(debug_assertions)]
                if DF.log_trade_ticker {
                    log::info!("[ticker] seeded around {:.2}", rate);
                }
            }
        }
        self.ticker.poll(now, self.base_rate(), now_local());

        let next = match render_landing(ctx, self) {
            Some(LandingAction::InputChanged) => {
                self.requote();
                None
            }
            Some(LandingAction::StartExchange) => {
                self.requote();
                start_exchange(&mut app.store, &self.input, &self.quote)
            }
            None => None,
        };

        repaint_for(
            ctx,
            [
                self.feed.time_until_next(now),
                self.ticker.time_until_next(now),
            ],
        );
        next
    }
}
