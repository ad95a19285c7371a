//! Wait leaf: consumes time without touching any external state.

use crate::animation::Animation;
use crate::error::{check_duration, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Delay {
    duration: f32,
    elapsed: f32,
}

impl Delay {
    pub fn new(duration: f32) -> Result<Self> {
        Ok(Self {
            duration: check_duration(duration)?,
            elapsed: 0.0,
        })
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Animation for Delay {
    fn start(&mut self) {
        self.elapsed = 0.0;
    }

    fn update(&mut self, dt: f32) -> bool {
        // Negative or NaN deltas end the wait immediately.
        if dt.is_nan() || dt < 0.0 {
            self.elapsed = self.elapsed.max(self.duration);
            return false;
        }
        self.elapsed += dt;
        self.elapsed < self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_until_duration_elapsed() {
        let mut delay = Delay::new(1.0).unwrap();
        delay.start();
        assert!(delay.update(0.5));
        assert!(!delay.update(0.5));
        delay.start();
        assert_eq!(delay.elapsed(), 0.0);
        assert!(delay.update(0.25));
    }

    #[test]
    fn zero_delay_finishes_immediately() {
        let mut delay = Delay::new(0.0).unwrap();
        delay.start();
        assert!(!delay.update(0.0));
    }

    #[test]
    fn negative_delta_ends_wait_without_rewinding() {
        let mut delay = Delay::new(1.0).unwrap();
        delay.start();
        assert!(delay.update(0.25));
        assert!(!delay.update(-0.5));
        assert_eq!(delay.elapsed(), 1.0);

        let mut zero = Delay::new(0.0).unwrap();
        zero.start();
        assert!(!zero.update(-0.1));
        assert_eq!(zero.elapsed(), 0.0);
    }
}
