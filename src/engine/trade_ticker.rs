use {
    crate::{
        config::SIMULATION,
        domain::{LiveTradeEntry, TradeDirection},
        engine::{CancelToken, JitterTimer},
        utils::AppInstant,
    },
    chrono::{DateTime, Local, TimeDelta},
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::{collections::VecDeque, time::Duration},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Synthetic "live trades" feed: a bounded window, newest first, that grows by
/// one random trade every few seconds.
pub struct TradeTicker {
    entries: VecDeque<LiveTradeEntry>,
    window: usize,
    timer: JitterTimer,
    rng: StdRng,
}

impl TradeTicker {
    pub fn new(now: AppInstant, token: CancelToken) -> Self {
        Self::with_rng(now, token, StdRng::from_os_rng())
    }

    pub fn with_rng(now: AppInstant, token: CancelToken, mut rng: StdRng) -> Self {
        let timer = JitterTimer::new(
            SIMULATION.trades.min_delay,
            SIMULATION.trades.max_delay,
            now,
            token,
            &mut rng,
        );
        Self {
            entries: VecDeque::with_capacity(SIMULATION.trades.window),
            window: SIMULATION.trades.window,
            timer,
            rng,
        }
    }

    /// Fill an empty list with back-dated trades around `rate`.
    /// No-op once anything is shown, so a later rate refresh doesn't reset the list.
    pub fn seed(&mut self, rate: f64, now: DateTime<Local>) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        for (i, &(amount, age_secs, is_buy)) in SIMULATION.trades.seed_trades.iter().enumerate() {
            let jitter = if i == 0 {
                0.0
            } else {
                self.jitter(SIMULATION.trades.seed_rate_jitter)
            };
            let direction = if is_buy {
                TradeDirection::Buy
            } else {
                TradeDirection::Sell
            };
            let at = now - TimeDelta::seconds(age_secs);
            self.entries
                .push_back(LiveTradeEntry::new(amount, rate + jitter, direction, at));
        }
        self.entries.truncate(self.window);
        true
    }

    /// Add a trade if the randomized delay has elapsed. Returns true when the list changed.
    pub fn poll(&mut self, now: AppInstant, rate: f64, wall_clock: DateTime<Local>) -> bool {
        if !self.timer.poll(now, &mut self.rng) {
            return false;
        }
        let entry = self.random_trade(rate, wall_clock);

        #[cfg(debug_assertions)]
        if DF.log_trade_ticker {
            log::info!(
                "[ticker] {} {:.2} @ {:.2}, next in {:?}",
                entry.direction,
                entry.amount,
                entry.rate,
                self.timer.time_until(now)
            );
        }

        self.push(entry);
        true
    }

    pub fn push(&mut self, entry: LiveTradeEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.window);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LiveTradeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        self.timer.time_until(now)
    }

    fn random_trade(&mut self, rate: f64, at: DateTime<Local>) -> LiveTradeEntry {
        let amounts = SIMULATION.trades.amounts;
        let amount = amounts[self.rng.random_range(0..amounts.len())];
        let direction = if self.rng.random_bool(0.5) {
            TradeDirection::Buy
        } else {
            TradeDirection::Sell
        };
        let trade_rate = rate + self.jitter(SIMULATION.trades.rate_jitter);
        LiveTradeEntry::new(amount, trade_rate, direction, at)
    }

    fn jitter(&mut self, max_abs: f64) -> f64 {
        if max_abs > 0.0 {
            self.rng.random_range(-max_abs..max_abs)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 478.5;

    fn ticker(now: AppInstant) -> TradeTicker {
        TradeTicker::with_rng(now, CancelToken::new(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn seeds_five_back_dated_trades_once() {
        let t0 = AppInstant::now();
        let wall = Local::now();
        let mut t = ticker(t0);

        assert!(t.seed(RATE, wall));
        assert_eq!(t.len(), 5);
        let first = t.entries().next().unwrap();
        assert_eq!(first.rate, RATE);
        assert_eq!(first.direction, TradeDirection::Buy);
        assert!(t.entries().all(|e| (e.rate - RATE).abs() <= 0.1 && e.timestamp < wall));

        assert!(!t.seed(RATE + 10.0, wall));
        assert_eq!(t.entries().next().unwrap().rate, RATE);
    }

    #[test]
    fn window_keeps_newest_five() {
        let t0 = AppInstant::now();
        let mut t = ticker(t0);
        let wall = Local::now();
        let mut at = t0;
        let mut added = 0;
        while added < 8 {
            at += Duration::from_secs(14);
            if t.poll(at, RATE, wall) {
                added += 1;
            }
        }
        assert_eq!(t.len(), 5);
        assert!(t.entries().all(|e| (e.rate - RATE).abs() <= 0.05));
        assert!(t.entries().all(|e| SIMULATION.trades.amounts.contains(&e.amount)));
    }

    #[test]
    fn newest_trade_goes_first() {
        let t0 = AppInstant::now();
        let mut t = ticker(t0);
        t.seed(RATE, Local::now());
        let marker = LiveTradeEntry::new(1.0, 1.0, TradeDirection::Sell, Local::now());
        t.push(marker.clone());
        assert_eq!(t.entries().next(), Some(&marker));
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn cancelled_ticker_stops_adding() {
        let t0 = AppInstant::now();
        let token = CancelToken::new();
        let mut t = TradeTicker::with_rng(t0, token.clone(), StdRng::seed_from_u64(3));
        token.cancel();
        assert!(!t.poll(t0 + Duration::from_secs(60), RATE, Local::now()));
        assert!(t.is_empty());
    }
}
