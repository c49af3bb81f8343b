use std::time::Duration;

pub struct LiveTradesConfig {
    /// Rolling window size, newest first.
    pub window: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
    /// Random trades are priced at rate +/- this.
    pub rate_jitter: f64,
    /// Seed trades are priced at rate +/- this.
    pub seed_rate_jitter: f64,
    /// Asset amounts picked at random for synthetic trades.
    pub amounts: &'static [f64],
    /// (amount, age in seconds, is_buy) for the entries shown when the first rate lands.
    pub seed_trades: &'static [(f64, i64, bool)],
}

pub struct ProgressConfig {
    pub tick: Duration,
    pub step: u8,
    pub ceiling: u8,
}

pub struct SimulationConfig {
    pub trades: LiveTradesConfig,
    pub progress: ProgressConfig,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    trades: LiveTradesConfig {
        window: 5,
        min_delay: Duration::from_secs(5),
        max_delay: Duration::from_secs(13),
        rate_jitter: 0.05,
        seed_rate_jitter: 0.1,
        amounts: &[
            450.00, 1_250.75, 890.25, 2_150.00, 675.50, 1_340.25, 925.75, 1_680.00,
        ],
        seed_trades: &[
            (1_250.00, 30, true),
            (850.75, 95, false),
            (2_100.00, 180, true),
            (675.25, 245, false),
            (1_890.50, 320, true),
        ],
    },
    progress: ProgressConfig {
        tick: Duration::from_millis(500),
        step: 10,
        ceiling: 100,
    },
};
