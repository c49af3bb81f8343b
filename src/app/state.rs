// src/app/state.rs

use {
    crate::{
        checkout::{ConfirmView, PaymentView, Route, StatusView},
        config::{PRICING, RATES},
        data::RateFeed,
        domain::{Quote, quote_from_input},
        engine::{ProgressSimulation, TimerScope, TradeTicker},
        utils::{AppInstant, now_local},
    },
    eframe::egui::Context,
};

/// The active screen. Each variant owns everything it schedules; dropping it
/// cancels its timers.
pub(crate) enum Screen {
    /// Not entered yet; the next frame navigates here.
    Pending(Route),
    Landing(LandingState),
    Confirm(ConfirmState),
    Payment(PaymentState),
    Status(StatusState),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Pending(Route::Landing)
    }
}

impl Screen {
    pub(crate) fn route(&self) -> Route {
        match self {
            Screen::Pending(route) => *route,
            Screen::Landing(_) => Route::Landing,
            Screen::Confirm(_) => Route::Confirm,
            Screen::Payment(_) => Route::Payment,
            Screen::Status(_) => Route::Status,
        }
    }
}

pub(crate) struct LandingState {
    pub(crate) input: String,
    pub(crate) quote: Quote,
    pub(crate) feed: RateFeed,
    pub(crate) ticker: TradeTicker,
    _scope: TimerScope,
}

impl LandingState {
    pub(crate) fn new(last_rate: Option<f64>, offline: bool, ctx: &Context) -> Self {
        let scope = TimerScope::new();
        let now = AppInstant::now();
        let feed = if offline {
            RateFeed::offline(last_rate.or(Some(RATES.fallback_rate)), now, scope.token())
        } else {
            RateFeed::new(last_rate, now, scope.token()).with_repaint(ctx)
        };
        let mut ticker = TradeTicker::new(now, scope.token());
        if feed.is_live() {
            ticker.seed(feed.current_or_fallback(), now_local());
        }

        let input = PRICING.default_fiat_input.to_string();
        let quote = quote_from_input(&input, feed.current_or_fallback());
        Self {
            input,
            quote,
            feed,
            ticker,
            _scope: scope,
        }
    }

    /// Rate the calculator quotes against right now.
    pub(crate) fn base_rate(&self) -> f64 {
        self.feed.current_or_fallback()
    }

    pub(crate) fn requote(&mut self) {
        self.quote = quote_from_input(&self.input, self.base_rate());
    }
}

pub(crate) struct ConfirmState {
    pub(crate) view: ConfirmView,
}

pub(crate) struct PaymentState {
    pub(crate) view: PaymentView,
}

pub(crate) struct StatusState {
    pub(crate) view: StatusView,
    pub(crate) progress: ProgressSimulation,
    _scope: TimerScope,
}

impl StatusState {
    pub(crate) fn new(view: StatusView) -> Self {
        let scope = TimerScope::new();
        Self {
            view,
            progress: ProgressSimulation::new(AppInstant::now(), scope.token()),
            _scope: scope,
        }
    }
}
