use macroquad::math::Vec2;

/// Projectile positions sampled once per fixed step.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryLog {
    current: Vec<Vec2>,
    last_flight: Vec<Vec2>,
}

impl TrajectoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, start: Vec2) {
        self.current.clear();
        self.current.push(start);
    }

    /// Appends `point` unless it repeats the previous sample.
    pub fn record(&mut self, point: Vec2) {
        if self.current.last() != Some(&point) {
            self.current.push(point);
        }
    }

    /// Archives the running flight so it stays viewable after a reload.
    pub fn finish(&mut self) {
        if self.current.len() >= 2 {
            self.last_flight = std::mem::take(&mut self.current);
        } else {
            self.current.clear();
        }
    }

    pub fn current(&self) -> &[Vec2] {
        &self.current
    }

    pub fn last_flight(&self) -> &[Vec2] {
        &self.last_flight
    }

    pub fn latest(&self) -> &[Vec2] {
        if self.current.len() >= 2 {
            &self.current
        } else {
            &self.last_flight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn skips_repeated_samples() {
        let mut log = TrajectoryLog::new();
        log.begin(vec2(150.0, 180.0));
        log.record(vec2(150.0, 180.0));
        log.record(vec2(160.0, 185.0));
        log.record(vec2(160.0, 185.0));
        log.record(vec2(170.0, 188.0));
        assert_eq!(log.current().len(), 3);
    }

    #[test]
    fn begin_discards_previous_samples() {
        let mut log = TrajectoryLog::new();
        log.begin(vec2(0.0, 0.0));
        log.record(vec2(1.0, 1.0));
        log.begin(vec2(5.0, 5.0));
        assert_eq!(log.current(), &[vec2(5.0, 5.0)]);
    }

    #[test]
    fn finished_flight_is_still_the_latest() {
        let mut log = TrajectoryLog::new();
        log.begin(vec2(0.0, 0.0));
        log.record(vec2(1.0, 2.0));
        log.finish();

        assert!(log.current().is_empty());
        assert_eq!(log.latest(), &[vec2(0.0, 0.0), vec2(1.0, 2.0)]);

        log.begin(vec2(3.0, 3.0));
        assert_eq!(log.latest().len(), 2, "single sample does not replace the last flight");
        log.record(vec2(4.0, 3.5));
        assert_eq!(log.latest(), &[vec2(3.0, 3.0), vec2(4.0, 3.5)]);
    }

    #[test]
    fn finishing_a_single_sample_keeps_previous_flight() {
        let mut log = TrajectoryLog::new();
        log.begin(vec2(0.0, 0.0));
        log.record(vec2(1.0, 1.0));
        log.finish();
        log.begin(vec2(9.0, 9.0));
        log.finish();
        assert_eq!(log.last_flight().len(), 2);
        assert!(log.current().is_empty());
    }
}
