use {
    crate::utils::AppInstant,
    rand::{Rng, rngs::StdRng},
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    },
};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Owns the token for everything a screen schedules.
/// Dropping the scope (screen teardown) cancels all of it.
#[derive(Debug, Default)]
pub struct TimerScope {
    token: CancelToken,
}

impl TimerScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TimerScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Fixed-period timer driven by polling with the current instant.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: AppInstant,
    token: CancelToken,
}

impl RepeatingTimer {
    /// First firing one period after `now`.
    pub fn new(period: Duration, now: AppInstant, token: CancelToken) -> Self {
        Self {
            period,
            next_due: now + period,
            token,
        }
    }

    /// First firing on the next poll.
    pub fn immediate(period: Duration, now: AppInstant, token: CancelToken) -> Self {
        Self {
            period,
            next_due: now,
            token,
        }
    }

    /// Number of periods elapsed since the last poll (0 if none or cancelled).
    pub fn poll(&mut self, now: AppInstant) -> u32 {
        if self.token.is_cancelled() || now < self.next_due {
            return 0;
        }
        let mut fired = 0;
        while now >= self.next_due {
            fired += 1;
            self.next_due += self.period;
            if self.period.is_zero() {
                break;
            }
        }
        fired
    }

    /// How long until the next firing, for scheduling a repaint.
    pub fn time_until(&self, now: AppInstant) -> Option<Duration> {
        if self.token.is_cancelled() {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// One-shot timer re-armed with a fresh random delay after every firing.
#[derive(Debug, Clone)]
pub struct JitterTimer {
    min_delay: Duration,
    max_delay: Duration,
    next_due: AppInstant,
    token: CancelToken,
}

impl JitterTimer {
    pub fn new(
        min_delay: Duration,
        max_delay: Duration,
        now: AppInstant,
        token: CancelToken,
        rng: &mut StdRng,
    ) -> Self {
        let mut timer = Self {
            min_delay,
            max_delay,
            next_due: now,
            token,
        };
        timer.rearm(now, rng);
        timer
    }

    /// Fires at most once per poll, then schedules the next firing from `now`.
    pub fn poll(&mut self, now: AppInstant, rng: &mut StdRng) -> bool {
        if self.token.is_cancelled() || now < self.next_due {
            return false;
        }
        self.rearm(now, rng);
        true
    }

    pub fn time_until(&self, now: AppInstant) -> Option<Duration> {
        if self.token.is_cancelled() {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }

    fn rearm(&mut self, now: AppInstant, rng: &mut StdRng) -> Duration {
        let delay = if self.max_delay > self.min_delay {
            rng.random_range(self.min_delay..self.max_delay)
        } else {
            self.min_delay
        };
        self.next_due = now + delay;
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn repeating_timer_fires_each_period_and_catches_up() {
        let t0 = AppInstant::now();
        let mut timer = RepeatingTimer::new(SEC, t0, CancelToken::new());
        assert_eq!(timer.poll(t0), 0);
        assert_eq!(timer.poll(t0 + SEC), 1);
        assert_eq!(timer.poll(t0 + SEC), 0);
        assert_eq!(timer.poll(t0 + SEC * 4), 3);
    }

    #[test]
    fn immediate_timer_fires_on_first_poll() {
        let t0 = AppInstant::now();
        let mut timer = RepeatingTimer::immediate(SEC * 300, t0, CancelToken::new());
        assert_eq!(timer.poll(t0), 1);
        assert_eq!(timer.poll(t0 + SEC), 0);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let t0 = AppInstant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let scope = TimerScope::new();
        let mut repeating = RepeatingTimer::new(SEC, t0, scope.token());
        let mut jitter = JitterTimer::new(SEC, SEC * 2, t0, scope.token(), &mut rng);

        scope.cancel();
        assert_eq!(repeating.poll(t0 + SEC * 10), 0);
        assert!(!jitter.poll(t0 + SEC * 10, &mut rng));
        assert_eq!(repeating.time_until(t0), None);
    }

    #[test]
    fn dropping_the_scope_cancels_its_tokens() {
        let token = {
            let scope = TimerScope::new();
            scope.token()
        };
        assert!(token.is_cancelled());
    }

    #[test]
    fn jitter_delay_stays_in_range() {
        let t0 = AppInstant::now();
        let mut rng = StdRng::seed_from_u64(42);
        let mut timer = JitterTimer::new(SEC * 5, SEC * 13, t0, CancelToken::new(), &mut rng);

        assert!(!timer.poll(t0 + SEC * 4, &mut rng));
        let wait = timer.time_until(t0).unwrap();
        assert!(wait >= SEC * 5 && wait < SEC * 13);

        let fire_at = t0 + wait;
        assert!(timer.poll(fire_at, &mut rng));
        assert!(!timer.poll(fire_at, &mut rng));
        let next = timer.time_until(fire_at).unwrap();
        assert!(next >= SEC * 5 && next < SEC * 13);
    }
}
