use {
    crate::{app::App, checkout::Route},
    eframe::egui::Context,
    std::time::Duration,
};

pub(crate) trait PhaseView {
    /// Run one frame of the screen. `Some(route)` asks the app to navigate.
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Route>;
}

/// Wake the UI in time for the earliest pending timer.
pub(crate) fn repaint_for(ctx: &Context, deadlines: impl IntoIterator<Item = Option<Duration>>) {
    if let Some(next) = deadlines.into_iter().flatten().min() {
        ctx.request_repaint_after(next);
    }
}
