use std::time::{Duration, Instant};

/// Manual swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Previous,
    Next,
}

/// Auto-advancing carousel position.
///
/// Driven by the UI tick rather than its own timer, so it holds no task and
/// is rebuilt whenever the Home screen is entered.
#[derive(Debug, Clone)]
pub struct CampaignSlider {
    index: usize,
    count: usize,
    interval: Duration,
    last_advance: Instant,
}

impl CampaignSlider {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            count: 0,
            interval,
            last_advance: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Update the number of cards, keeping the index in range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.index >= count {
            self.index = 0;
        }
    }

    /// Advance one card per elapsed interval. Returns whether the index moved.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.count <= 1 {
            self.last_advance = now;
            return false;
        }
        if now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.count;
        self.last_advance = now;
        true
    }

    /// Resync after a user scroll settles at `offset`, snapping to the
    /// nearest card and restarting the interval.
    pub fn on_scroll_end(&mut self, offset: f32, card_width: f32, now: Instant) {
        if self.count == 0 || card_width <= 0.0 {
            return;
        }
        let nearest = (offset / card_width).round().max(0.0) as usize;
        self.index = nearest.min(self.count - 1);
        self.last_advance = now;
    }

    /// A swipe is a scroll that settles on the neighbouring card, wrapping
    /// at either end.
    pub fn swipe(&mut self, direction: Swipe, now: Instant) {
        if self.count == 0 {
            return;
        }
        let target = match direction {
            Swipe::Next => (self.index + 1) % self.count,
            Swipe::Previous => (self.index + self.count - 1) % self.count,
        };
        self.on_scroll_end(target as f32, 1.0, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(3000);

    #[test]
    fn advances_and_wraps() {
        let start = Instant::now();
        let mut slider = CampaignSlider::new(INTERVAL, start);
        slider.set_count(3);

        let mut seen = vec![slider.index()];
        for tick in 1..=3 {
            assert!(slider.on_tick(start + INTERVAL * tick));
            seen.push(slider.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn waits_for_full_interval() {
        let start = Instant::now();
        let mut slider = CampaignSlider::new(INTERVAL, start);
        slider.set_count(3);

        assert!(!slider.on_tick(start + Duration::from_millis(2999)));
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn single_card_never_moves() {
        let start = Instant::now();
        let mut slider = CampaignSlider::new(INTERVAL, start);
        slider.set_count(1);
        assert!(!slider.on_tick(start + INTERVAL * 5));
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn scroll_end_snaps_to_nearest_and_restarts_timer() {
        let start = Instant::now();
        let mut slider = CampaignSlider::new(INTERVAL, start);
        slider.set_count(3);

        let swiped_at = start + Duration::from_millis(2500);
        slider.on_scroll_end(310.0, 200.0, swiped_at);
        assert_eq!(slider.index(), 2);

        assert!(!slider.on_tick(start + INTERVAL));
        assert!(slider.on_tick(swiped_at + INTERVAL));
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn swipe_wraps_both_ways() {
        let start = Instant::now();
        let mut slider = CampaignSlider::new(INTERVAL, start);
        slider.set_count(3);

        slider.swipe(Swipe::Previous, start);
        assert_eq!(slider.index(), 2);
        slider.swipe(Swipe::Next, start);
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn swipe_restarts_interval() {
        let start = Instant::now();
        let mut slider = CampaignSlider::new(INTERVAL, start);
        slider.set_count(3);

        let swiped_at = start + Duration::from_millis(2900);
        slider.swipe(Swipe::Next, swiped_at);
        assert_eq!(slider.index(), 1);
        assert!(!slider.on_tick(start + INTERVAL));
        assert!(slider.on_tick(swiped_at + INTERVAL));
        assert_eq!(slider.index(), 2);
    }
}
