//! Descent timer - drives automatic descent and accelerates on every fire
//!
//! The timer is a fixed-timestep accumulator: the owner feeds it elapsed time
//! through [`DescentTimer::advance`] and gets back how many "advance" signals
//! fired. At most one fire is pending at a time; `pause` drops it.
//!
//! Interval in milliseconds is `max_speed * 2 - speed * 2`. Every fire tries to
//! bump the speed by one; the bump is rejected once `candidate * 2 >= max_speed`,
//! so the interval never shrinks to zero.

use log::trace;

/// Idle or running with the time left until the next fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { remaining_ms: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescentTimer {
    speed: u32,
    start_speed: u32,
    max_speed: u32,
    state: TimerState,
}

impl DescentTimer {
    /// `start_speed` must be below `max_speed` for the interval to be positive;
    /// [`GameConfig::validate`](crate::GameConfig::validate) enforces it.
    pub fn new(start_speed: u32, max_speed: u32) -> Self {
        Self {
            speed: start_speed,
            start_speed,
            max_speed,
            state: TimerState::Idle,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn start_speed(&self) -> u32 {
        self.start_speed
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Milliseconds between fires at the current speed
    pub fn interval_ms(&self) -> u32 {
        self.max_speed
            .saturating_mul(2)
            .saturating_sub(self.speed.saturating_mul(2))
            .max(1)
    }

    /// Schedule the next fire. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = TimerState::Running {
            remaining_ms: self.interval_ms(),
        };
    }

    /// Drop the pending fire, keeping the current speed
    pub fn pause(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Pause, restore the start speed and start again
    pub fn reset(&mut self) {
        self.pause();
        self.speed = self.start_speed;
        self.start();
    }

    fn try_set_speed(&mut self, candidate: u32) {
        if candidate.saturating_mul(2) >= self.max_speed {
            return;
        }
        self.speed = candidate;
    }

    fn fire(&mut self) {
        self.try_set_speed(self.speed.saturating_add(1));
        trace!("descent fired, speed={} interval={}ms", self.speed, self.interval_ms());
        self.state = TimerState::Running {
            remaining_ms: self.interval_ms(),
        };
    }

    /// Feed elapsed time; returns the number of advance signals that fired
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let mut elapsed = elapsed_ms;
        let mut fired = 0;
        while let TimerState::Running { remaining_ms } = self.state {
            if elapsed < remaining_ms {
                self.state = TimerState::Running {
                    remaining_ms: remaining_ms - elapsed,
                };
                break;
            }
            elapsed -= remaining_ms;
            self.fire();
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = DescentTimer::new(100, 400);
        assert_eq!(timer.advance(10_000), 0);
        assert_eq!(timer.speed(), 100);
    }

    #[test]
    fn start_twice_keeps_one_pending_fire() {
        let mut timer = DescentTimer::new(100, 400);
        timer.start();
        timer.advance(300);
        timer.start();
        assert_eq!(timer.state(), TimerState::Running { remaining_ms: 300 });
    }

    #[test]
    fn fires_after_one_interval() {
        let mut timer = DescentTimer::new(100, 400);
        timer.start();
        assert_eq!(timer.interval_ms(), 600);
        assert_eq!(timer.advance(599), 0);
        assert_eq!(timer.advance(1), 1);
        assert_eq!(timer.speed(), 101);
        assert_eq!(timer.interval_ms(), 598);
    }

    #[test]
    fn pause_keeps_speed() {
        let mut timer = DescentTimer::new(100, 400);
        timer.start();
        timer.advance(600);
        timer.pause();
        assert!(!timer.is_running());
        assert_eq!(timer.speed(), 101);
        assert_eq!(timer.advance(5000), 0);
    }

    #[test]
    fn huge_max_speed_saturates_instead_of_overflowing() {
        let mut timer = DescentTimer::new(1, 3_000_000_000);
        timer.start();
        assert_eq!(timer.interval_ms(), u32::MAX - 2);
        assert_eq!(timer.advance(1000), 0);
        assert!(timer.is_running());
    }
}
