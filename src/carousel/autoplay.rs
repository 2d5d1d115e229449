use std::time::Duration;
use crate::state::AutoplayState;

/// Recurring advance driven by frame time.
///
/// Fires at most once per tick: after a long stall the carousel moves a single
/// slide and the remainder is carried into the next period.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    state: AutoplayState,
}

impl Autoplay {
    /// `interval` must be non-zero, see `Carousel::new`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            state: AutoplayState::Stopped,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = AutoplayState::Running;
    }

    pub fn stop(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = AutoplayState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.state != AutoplayState::Running {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }

        let interval = self.interval.as_nanos();
        let remainder = self.elapsed.as_nanos() % interval;
        self.elapsed = Duration::from_nanos(remainder as u64);
        true
    }
}
