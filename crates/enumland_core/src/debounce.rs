use std::time::{Duration, Instant};

/// Quiescence window used when no setting overrides it.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds back a rapidly changing value until it has been stable for `window`.
///
/// Time is passed in by the caller so the debouncer stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
    committed: String,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            committed: String::new(),
        }
    }

    /// Record a raw value; restarts the quiescence window at `at`.
    pub fn input(&mut self, value: impl Into<String>, at: Instant) {
        self.pending = Some((value.into(), at));
    }

    /// Commit the pending value once it has settled.
    ///
    /// Returns the new committed value only when it differs from the
    /// previous one.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let settled = match &self.pending {
            Some((_, at)) => now.saturating_duration_since(*at) >= self.window,
            None => false,
        };
        if !settled {
            return None;
        }
        let (value, _) = self.pending.take()?;
        if value == self.committed {
            return None;
        }
        self.committed = value;
        Some(self.committed.clone())
    }

    /// Instant at which the pending value will settle, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.window)
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn commits_only_after_quiescence() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));

        debouncer.input("e", t0);
        debouncer.input("ex", t0 + ms(200));
        assert_eq!(debouncer.poll(t0 + ms(500)), None);
        assert_eq!(debouncer.poll(t0 + ms(699)), None);
        assert_eq!(debouncer.poll(t0 + ms(700)), Some("ex".to_string()));
        assert_eq!(debouncer.committed(), "ex");
        assert_eq!(debouncer.poll(t0 + ms(2000)), None);
    }

    #[test]
    fn settling_back_to_committed_value_is_not_a_change() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));

        debouncer.input("example.com", t0);
        debouncer.input("", t0 + ms(100));
        assert_eq!(debouncer.poll(t0 + ms(600)), None);
        assert_eq!(debouncer.committed(), "");
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn deadline_tracks_latest_input() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));
        assert_eq!(debouncer.deadline(), None);

        debouncer.input("a", t0);
        debouncer.input("ab", t0 + ms(300));
        assert_eq!(debouncer.deadline(), Some(t0 + ms(800)));
    }

    #[test]
    fn zero_window_commits_on_next_poll() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.input("a", t0);
        assert_eq!(debouncer.poll(t0), Some("a".to_string()));
    }
}
