use {
    eframe::{Frame, egui::Context},
    std::mem,
};

use crate::{
    Cli,
    app::{ConfirmState, LandingState, PaymentState, PhaseView, Screen, StatusState},
    checkout::{ConfirmView, PaymentView, Route, StatusView},
    session::{AppSessionStore, open_app_store},
    ui::setup_custom_visuals,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[cfg(target_arch = "wasm32")]
use {crate::app::web_route, std::time::Duration};

pub struct App {
    pub(crate) store: AppSessionStore,
    /// Last rate any landing visit received, reused on re-entry.
    pub(crate) last_rate: Option<f64>,
    pub(crate) args: Cli,
    screen: Screen,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut store = open_app_store();
        if args.reset_session {
            store.clear();
        }

        let initial = Self::initial_route(&args);
        let mut app = Self {
            store,
            last_rate: None,
            args,
            screen: Screen::default(),
        };
        app.screen = app.enter(initial, &cc.egui_ctx);

        // Keep the address bar on the screen actually entered.
        if let Some(landed) = redirected(initial, app.screen.route()) {
            log::info!(
                "{} needs an exchange in progress, opened {} instead",
                initial.path(),
                landed.path()
            );
            #[cfg(target_arch = "wasm32")]
            web_route::replace_route(landed);
        }
        app
    }

    #[cfg(target_arch = "wasm32")]
    fn initial_route(_args: &Cli) -> Route {
        web_route::current_route()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn initial_route(args: &Cli) -> Route {
        Route::from_path(&args.start)
    }

    /// Build the screen for `route`, following guard redirects until one loads.
    fn enter(&mut self, route: Route, ctx: &Context) -> Screen {
        let loaded = match route {
            Route::Landing => Ok(Screen::Landing(LandingState::new(
                self.last_rate,
                self.args.offline,
                ctx,
            ))),
            Route::Confirm => ConfirmView::load(&mut self.store)
                .map(|view| Screen::Confirm(ConfirmState { view })),
            Route::Payment => PaymentView::load(&mut self.store)
                .map(|view| Screen::Payment(PaymentState { view })),
            Route::Status => {
                StatusView::load(&mut self.store).map(|view| Screen::Status(StatusState::new(view)))
            }
        };

        match loaded {
            Ok(screen) => screen,
            Err(redirect) => {
                #[cfg(debug_assertions)]
                if DF.log_navigation {
                    log::info!("[nav] {} has no session, redirecting to {}", route, redirect);
                }
                self.enter(redirect, ctx)
            }
        }
    }

    /// Leave the current screen and enter `route`. The old screen is dropped
    /// first so its timers stop before the next one starts.
    fn navigate(&mut self, route: Route, ctx: &Context) {
        #[cfg(debug_assertions)]
        let from = self.screen.route();
        self.screen = Screen::Pending(route);
        self.screen = self.enter(route, ctx);

        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("[nav] {} -> {}", from, self.screen.route());
        }

        #[cfg(target_arch = "wasm32")]
        web_route::push_route(self.screen.route());

        ctx.request_repaint();
    }

    /// Browser back/forward changes the location without going through us.
    #[cfg(target_arch = "wasm32")]
    fn follow_location(&mut self, ctx: &Context) {
        let location = web_route::current_route();
        if location != self.screen.route() {
            self.screen = Screen::Pending(location);
            self.screen = self.enter(location, ctx);
            if let Some(landed) = redirected(location, self.screen.route()) {
                web_route::replace_route(landed);
            }
        }
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        #[cfg(target_arch = "wasm32")]
        self.follow_location(ctx);

        let mut current = mem::take(&mut self.screen);
        let next = match &mut current {
            Screen::Pending(route) => Some(*route),
            Screen::Landing(s) => s.tick(self, ctx),
            Screen::Confirm(s) => s.tick(self, ctx),
            Screen::Payment(s) => s.tick(self, ctx),
            Screen::Status(s) => s.tick(self, ctx),
        };
        self.screen = current;

        if let Some(route) = next {
            self.navigate(route, ctx);
        }
    }
}

/// The screen actually entered, when the guards sent us somewhere other than `requested`.
fn redirected(requested: Route, entered: Route) -> Option<Route> {
    (requested != entered).then_some(entered)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            checkout::{PaymentView, start_exchange},
            domain::quote_from_input,
            session::{MemoryStore, SessionStore},
        },
    };

    /// Mirrors the guard in `App::enter` without needing an egui context.
    fn entered(route: Route, store: &mut SessionStore<MemoryStore>) -> Route {
        match route {
            Route::Payment => PaymentView::load(store).map_or_else(|r| r, |_| Route::Payment),
            other => other,
        }
    }

    #[test]
    fn guarded_start_without_session_is_redirected() {
        let mut store = SessionStore::new(MemoryStore::new());
        let landed = entered(Route::Payment, &mut store);
        assert_eq!(redirected(Route::Payment, landed), Some(Route::Landing));
    }

    #[test]
    fn start_that_loads_keeps_location() {
        let mut store = SessionStore::new(MemoryStore::new());
        start_exchange(&mut store, "22000", &quote_from_input("22000", 478.5));
        let landed = entered(Route::Payment, &mut store);
        assert_eq!(redirected(Route::Payment, landed), None);
        assert_eq!(redirected(Route::Landing, Route::Landing), None);
    }
}
