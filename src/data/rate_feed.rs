use {
    crate::{
        config::RATES,
        data::{RateFeedError, fetch_rate},
        engine::{CancelToken, RepeatingTimer},
        utils::AppInstant,
    },
    eframe::egui::Context,
    std::{
        sync::mpsc::{self, Receiver, Sender},
        time::Duration,
    },
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Builder};

#[cfg(debug_assertions)]
use crate::config::DF;

type FetchResult = Result<f64, RateFeedError>;

/// Periodic best-effort refresh of the base rate.
///
/// Fetches run off the UI thread and report back over a channel; `poll` drains
/// it once per frame. At most one request is in flight. A failed fetch keeps the
/// previous rate.
pub struct RateFeed {
    current: Option<f64>,
    timer: RepeatingTimer,
    token: CancelToken,
    enabled: bool,
    in_flight: bool,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
    repaint: Option<Context>,
}

impl RateFeed {
    /// Live feed; the first fetch goes out on the first `poll`.
    pub fn new(seed: Option<f64>, now: AppInstant, token: CancelToken) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            current: seed,
            timer: RepeatingTimer::immediate(RATES.refresh_interval, now, token.clone()),
            token,
            enabled: true,
            in_flight: false,
            tx,
            rx,
            repaint: None,
        }
    }

    /// Never touches the network; quotes stay on `seed` or the fallback.
    pub fn offline(seed: Option<f64>, now: AppInstant, token: CancelToken) -> Self {
        Self {
            enabled: false,
            ..Self::new(seed, now, token)
        }
    }

    /// Wake the UI when a response lands.
    pub fn with_repaint(mut self, ctx: &Context) -> Self {
        self.repaint = Some(ctx.clone());
        self
    }

    /// Drain finished fetches and start a new one if due.
    /// Returns the new rate when it changed this call.
    pub fn poll(&mut self, now: AppInstant) -> Option<f64> {
        let mut updated = None;
        while let Ok(result) = self.rx.try_recv() {
            self.in_flight = false;
            if let Some(rate) = self.apply(result) {
                updated = Some(rate);
            }
        }

        let due = self.timer.poll(now) > 0;
        if due && self.enabled && !self.in_flight && !self.token.is_cancelled() {
            self.spawn_fetch();
        }
        updated
    }

    /// Fold one fetch result into the feed. Ignored after teardown.
    pub fn apply(&mut self, result: FetchResult) -> Option<f64> {
        if self.token.is_cancelled() {
            return None;
        }
        match result {
            Ok(rate) if rate.is_finite() && rate > 0.0 => {
                let changed = self.current != Some(rate);
                self.current = Some(rate);
                changed.then_some(rate)
            }
            Ok(rate) => {
                log::warn!("Discarding unusable rate {}", rate);
                None
            }
            Err(e) => {
                log::warn!("Rate refresh failed, keeping previous rate: {}", e);
                None
            }
        }
    }

    /// Last good rate, if any fetch (or the seed) produced one.
    pub fn current(&self) -> Option<f64> {
        self.current
    }

    pub fn current_or_fallback(&self) -> f64 {
        self.current.unwrap_or(RATES.fallback_rate)
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        self.timer.time_until(now)
    }

    fn spawn_fetch(&mut self) {
        self.in_flight = true;
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        #[cfg(debug_assertions)]
        if DF.log_rate_feed {
            log::info!("[rates] refresh scheduled");
        }

        #[cfg(not(target_arch = "wasm32"))]
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt.block_on(fetch_rate()),
                Err(e) => Err(RateFeedError::Worker(e.to_string())),
            };
            let _ = tx.send(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(fetch_rate().await);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline(seed: Option<f64>) -> RateFeed {
        RateFeed::offline(seed, AppInstant::now(), CancelToken::new())
    }

    #[test]
    fn falls_back_until_first_rate() {
        let feed = offline(None);
        assert!(!feed.is_live());
        assert_eq!(feed.current_or_fallback(), RATES.fallback_rate);
    }

    #[test]
    fn success_replaces_rate() {
        let mut feed = offline(None);
        assert_eq!(feed.apply(Ok(481.2)), Some(481.2));
        assert_eq!(feed.current(), Some(481.2));
        assert_eq!(feed.apply(Ok(481.2)), None);
    }

    #[test]
    fn failure_keeps_previous_rate() {
        let mut feed = offline(Some(480.0));
        assert_eq!(feed.apply(Err(RateFeedError::MissingRate("KZT"))), None);
        assert_eq!(feed.current(), Some(480.0));
        assert_eq!(feed.apply(Ok(482.0)), Some(482.0));
    }

    #[test]
    fn rejects_non_positive_rates() {
        let mut feed = offline(Some(480.0));
        assert_eq!(feed.apply(Ok(0.0)), None);
        assert_eq!(feed.apply(Ok(f64::NAN)), None);
        assert_eq!(feed.current(), Some(480.0));
    }

    #[test]
    fn results_after_teardown_are_dropped() {
        let token = CancelToken::new();
        let mut feed = RateFeed::offline(None, AppInstant::now(), token.clone());
        token.cancel();
        assert_eq!(feed.apply(Ok(490.0)), None);
        assert_eq!(feed.current(), None);
    }

    #[test]
    fn offline_feed_never_fetches() {
        let t0 = AppInstant::now();
        let mut feed = RateFeed::offline(None, t0, CancelToken::new());
        assert_eq!(feed.poll(t0 + Duration::from_secs(600)), None);
        assert!(!feed.in_flight);
        assert_eq!(feed.time_until_next(t0), None);
    }
}
