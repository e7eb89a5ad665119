//! Round countdown clock.

/// Countdown that never goes below zero and reports expiry once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundClock {
    remaining: f64,
    running: bool,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refill the clock and start counting down.
    pub fn reset(&mut self, starting_secs: f64) {
        self.remaining = sanitize(starting_secs);
        self.running = self.remaining > 0.0;
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Count down by `dt` seconds. Returns true on the call that reaches zero.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.drain(dt)
    }

    /// Take `seconds` off the clock. Returns true on the call that reaches zero.
    pub fn penalize(&mut self, seconds: f64) -> bool {
        self.drain(seconds)
    }

    /// Stop at zero without reporting expiry.
    pub fn freeze(&mut self) {
        self.remaining = 0.0;
        self.running = false;
    }

    fn drain(&mut self, secs: f64) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = (self.remaining - sanitize(secs)).max(0.0);
        if self.remaining <= 0.0 {
            self.freeze();
            return true;
        }
        false
    }
}

/// Negative and non-finite durations count as zero.
fn sanitize(secs: f64) -> f64 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}
