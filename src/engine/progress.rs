use {
    crate::{
        config::SIMULATION,
        engine::{CancelToken, RepeatingTimer},
        utils::AppInstant,
    },
    std::time::Duration,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Processing,
    Completed,
}

/// Fake settlement: climbs to the ceiling in fixed steps, then reports completion
/// on the following tick.
pub struct ProgressSimulation {
    progress: u8,
    status: TxStatus,
    timer: RepeatingTimer,
}

impl ProgressSimulation {
    pub fn new(now: AppInstant, token: CancelToken) -> Self {
        Self {
            progress: 0,
            status: TxStatus::Processing,
            timer: RepeatingTimer::new(SIMULATION.progress.tick, now, token),
        }
    }

    /// Advance by however many ticks have elapsed. Returns true if anything changed.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        if self.status == TxStatus::Completed {
            return false;
        }
        let ticks = self.timer.poll(now);
        for _ in 0..ticks {
            self.tick();
            if self.status == TxStatus::Completed {
                break;
            }
        }
        ticks > 0
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Progress as a 0.0..=1.0 fraction for a progress bar.
    pub fn fraction(&self) -> f32 {
        self.progress as f32 / SIMULATION.progress.ceiling.max(1) as f32
    }

    pub fn status(&self) -> TxStatus {
        self.status
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        match self.status {
            TxStatus::Processing => self.timer.time_until(now),
            TxStatus::Completed => None,
        }
    }

    fn tick(&mut self) {
        let ceiling = SIMULATION.progress.ceiling;
        if self.progress >= ceiling {
            self.progress = ceiling;
            self.status = TxStatus::Completed;
        } else {
            self.progress = self
                .progress
                .saturating_add(SIMULATION.progress.step)
                .min(ceiling);
        }

        #[cfg(debug_assertions)]
        if DF.log_progress {
            log::info!("[progress] {}% {:?}", self.progress, self.status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_one_tick_after_reaching_ceiling() {
        let t0 = AppInstant::now();
        let tick = SIMULATION.progress.tick;
        let mut sim = ProgressSimulation::new(t0, CancelToken::new());

        assert!(!sim.poll(t0));
        assert!(sim.poll(t0 + tick));
        assert_eq!(sim.progress(), 10);

        sim.poll(t0 + tick * 10);
        assert_eq!(sim.progress(), 100);
        assert_eq!(sim.status(), TxStatus::Processing);

        sim.poll(t0 + tick * 11);
        assert_eq!(sim.status(), TxStatus::Completed);
        assert_eq!(sim.time_until_next(t0 + tick * 11), None);
        assert!(!sim.poll(t0 + tick * 50));
    }

    #[test]
    fn long_stall_completes_without_overshooting() {
        let t0 = AppInstant::now();
        let mut sim = ProgressSimulation::new(t0, CancelToken::new());
        sim.poll(t0 + Duration::from_secs(60));
        assert_eq!(sim.progress(), 100);
        assert_eq!(sim.status(), TxStatus::Completed);
        assert_eq!(sim.fraction(), 1.0);
    }

    #[test]
    fn teardown_freezes_progress() {
        let t0 = AppInstant::now();
        let token = CancelToken::new();
        let mut sim = ProgressSimulation::new(t0, token.clone());
        sim.poll(t0 + SIMULATION.progress.tick * 3);
        token.cancel();
        assert!(!sim.poll(t0 + Duration::from_secs(60)));
        assert_eq!(sim.progress(), 30);
    }
}
