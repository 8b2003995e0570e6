use std::time::Duration;

/// Counts a number up from zero in fixed interval ticks.
///
/// Each tick adds `target / (duration / interval)` to a float accumulator and
/// shows its floor. The tick that reaches or passes the target clamps to it
/// and finishes the animation.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
    interval: Duration,
    since_tick: Duration,
    ticks: u32,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration: Duration, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let frames = (duration.as_secs_f64() / interval.as_secs_f64()).max(1.0);

        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            interval,
            since_tick: Duration::ZERO,
            ticks: 0,
            finished: false,
        }
    }

    /// Reads the target from a `data-count` style attribute value.
    pub fn parse_target(raw: &str) -> Option<i64> {
        raw.trim().parse::<i64>().ok()
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.finished {
            return;
        }

        self.since_tick += elapsed;
        while !self.finished && self.since_tick >= self.interval {
            self.since_tick -= self.interval;
            self.tick();
        }
    }

    fn tick(&mut self) {
        self.ticks += 1;
        self.current += self.step;

        let reached = if self.step >= 0.0 {
            self.current >= self.target as f64
        } else {
            self.current <= self.target as f64
        };
        if reached {
            self.current = self.target as f64;
            self.finished = true;
        }
    }

    pub fn value(&self) -> i64 {
        self.current.floor() as i64
    }

    pub fn text(&self) -> String {
        self.value().to_string()
    }

    #[cfg(test)]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(2_000);
    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn zero_target_shows_zero_and_stops_after_first_tick() {
        let mut counter = CounterAnimation::new(0, DURATION, INTERVAL);
        assert_eq!(counter.text(), "0");

        counter.advance(INTERVAL);
        assert_eq!(counter.text(), "0");
        assert!(counter.is_finished());
        assert_eq!(counter.ticks(), 1);

        counter.advance(INTERVAL * 10);
        assert_eq!(counter.ticks(), 1);
    }

    #[test]
    fn hundred_climbs_monotonically_and_lands_exactly() {
        let mut counter = CounterAnimation::new(100, DURATION, INTERVAL);
        let mut last = counter.value();

        while !counter.is_finished() {
            counter.advance(INTERVAL);
            assert!(counter.value() >= last);
            assert!(counter.value() <= 100);
            last = counter.value();
        }

        assert_eq!(counter.text(), "100");
        // 125 steps of 0.8 sum to just under 100 in f64; the 126th clamps.
        assert_eq!(counter.ticks(), 126);
    }

    #[test]
    fn display_is_floored() {
        let mut counter = CounterAnimation::new(100, DURATION, INTERVAL);
        counter.advance(INTERVAL);
        // 100 / 125 = 0.8 per tick.
        assert_eq!(counter.text(), "0");
        counter.advance(INTERVAL);
        assert_eq!(counter.text(), "1");
    }

    #[test]
    fn partial_interval_carries_over() {
        let mut counter = CounterAnimation::new(250, DURATION, INTERVAL);
        counter.advance(Duration::from_millis(10));
        assert_eq!(counter.ticks(), 0);
        counter.advance(Duration::from_millis(10));
        assert_eq!(counter.ticks(), 1);
        assert_eq!(counter.text(), "2");
    }

    #[test]
    fn non_multiple_step_clamps_to_target() {
        let mut counter = CounterAnimation::new(7, DURATION, INTERVAL);
        counter.advance(DURATION * 2);
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 7);
    }

    #[test]
    fn negative_target_counts_down_and_clamps() {
        let mut counter = CounterAnimation::new(-50, DURATION, INTERVAL);
        counter.advance(DURATION + INTERVAL);
        assert!(counter.is_finished());
        assert_eq!(counter.value(), -50);
    }

    #[test]
    fn parses_attribute_targets() {
        assert_eq!(CounterAnimation::parse_target(" 150 "), Some(150));
        assert_eq!(CounterAnimation::parse_target("15+"), None);
    }
}
