use std::time::{Duration, Instant};

/// Trailing-edge debounce for free-text search input.
///
/// Every `push` restarts the quiet period. `poll` hands out the value once the
/// quiet period has fully elapsed since the last push, and only once.
#[derive(Debug, Clone)]
pub struct SearchCoalescer {
    quiet_period: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

impl SearchCoalescer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn push(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.quiet_period,
        });
    }

    /// Returns the committed value if the quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drops any pending value. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
