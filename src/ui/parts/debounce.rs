use std::time::{Duration, Instant};

/// Delays a search until typing has been idle for `delay`.
///
/// Driven by the UI tick: feed keystrokes with [`input`](Self::input) and
/// call [`poll`](Self::poll) on every tick.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record the latest text; restarts the idle timer.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Text to search for, once the idle delay has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay => {
                self.pending.take().map(|(text, _)| text)
            }
            _ => None,
        }
    }

    /// Fire immediately (e.g. on Enter), skipping the remaining delay.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }

    /// Drop typed text that has not been searched yet.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_idle_delay() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new(Duration::from_millis(400));

        debounce.input("el", start);
        debounce.input("elem", start + Duration::from_millis(300));
        assert_eq!(debounce.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            debounce.poll(start + Duration::from_millis(700)).as_deref(),
            Some("elem")
        );
        assert_eq!(debounce.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn flush_and_cancel() {
        let now = Instant::now();
        let mut debounce = SearchDebounce::new(Duration::from_secs(1));
        debounce.input("coolant", now);
        assert_eq!(debounce.flush().as_deref(), Some("coolant"));

        debounce.input("x", now);
        debounce.cancel();
        assert_eq!(debounce.flush(), None);
    }
}
