/// Turns variable frame times into a whole number of fixed simulation steps.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepper {
    step_s: f32,
    max_frame_s: f32,
    accumulator: f32,
}

impl FixedStepper {
    pub fn new(step_s: f32, max_frame_s: f32) -> Self {
        Self {
            step_s,
            max_frame_s,
            accumulator: 0.0,
        }
    }

    pub fn step_s(&self) -> f32 {
        self.step_s
    }

    /// Adds one frame's worth of time and returns how many steps are due.
    /// Long frames (window drags, breakpoints) are capped at `max_frame_s`.
    pub fn advance(&mut self, frame_dt: f32) -> usize {
        self.accumulator += frame_dt.clamp(0.0, self.max_frame_s);
        let mut steps = 0;
        while self.accumulator >= self.step_s {
            self.accumulator -= self.step_s;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_leftover_time_between_frames() {
        let mut stepper = FixedStepper::new(0.25, 1.0);
        assert_eq!(stepper.advance(0.125), 0);
        assert_eq!(stepper.advance(0.25), 1);
        assert_eq!(stepper.advance(0.75), 3);
    }

    #[test]
    fn caps_long_frames() {
        let mut stepper = FixedStepper::new(0.25, 0.5);
        assert_eq!(stepper.advance(10.0), 2);
        assert_eq!(stepper.advance(-1.0), 0);
    }
}
