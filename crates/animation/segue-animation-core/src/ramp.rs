//! Leaf ramp: drives one external scalar from its sampled value to a target.

use std::fmt;

use log::trace;

use crate::animation::Animation;
use crate::error::{check_duration, Result};
use crate::interp::Easing;
use crate::sink::ValueSink;

type BoxedInterp = Box<dyn Fn(f32, f32, f32) -> f32>;

/// Interpolates `sink` from whatever it holds at `start` to `target`
/// over `duration` seconds.
pub struct Ramp<S: ValueSink> {
    sink: S,
    start: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    interpolate: BoxedInterp,
}

impl<S: ValueSink> Ramp<S> {
    /// Build an unstarted ramp. A zero duration is allowed and snaps to
    /// `target` on the first update.
    pub fn new<F>(sink: S, target: f32, duration: f32, interpolate: F) -> Result<Self>
    where
        F: Fn(f32, f32, f32) -> f32 + 'static,
    {
        let duration = check_duration(duration)?;
        let start = sink.get();
        Ok(Self {
            sink,
            start,
            target,
            duration,
            elapsed: 0.0,
            interpolate: Box::new(interpolate),
        })
    }

    /// Build and start in one step.
    pub fn started<F>(sink: S, target: f32, duration: f32, interpolate: F) -> Result<Self>
    where
        F: Fn(f32, f32, f32) -> f32 + 'static,
    {
        let mut ramp = Self::new(sink, target, duration, interpolate)?;
        ramp.start();
        Ok(ramp)
    }

    /// Build an unstarted ramp from a data-form easing.
    pub fn with_easing(sink: S, target: f32, duration: f32, easing: Easing) -> Result<Self> {
        match easing.as_fn() {
            Some(f) => Self::new(sink, target, duration, f),
            None => Self::new(sink, target, duration, easing.into_fn()),
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Value sampled from the sink at the last `start`.
    pub fn start_value(&self) -> f32 {
        self.start
    }

    /// Fraction of the duration consumed, in [0,1]. Zero-length ramps report
    /// 0 until time has been consumed.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.elapsed > 0.0 { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

}

impl<S: ValueSink> Animation for Ramp<S> {
    fn start(&mut self) {
        self.elapsed = 0.0;
        self.start = self.sink.get();
    }

    fn update(&mut self, dt: f32) -> bool {
        // Negative or NaN deltas converge immediately; elapsed never decreases.
        if dt.is_nan() || dt < 0.0 {
            self.elapsed = self.elapsed.max(self.duration);
            self.sink.set(self.target);
            return false;
        }
        self.elapsed += dt;
        // elapsed >= 0 here, so this branch implies duration > 0.
        if self.elapsed < self.duration {
            let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
            let value = (self.interpolate)(self.start, self.target, t);
            trace!("ramp {} -> {}: {}", self.start, self.target, value);
            self.sink.set(value);
            true
        } else {
            self.sink.set(self.target);
            false
        }
    }
}

impl<S: ValueSink + fmt::Debug> fmt::Debug for Ramp<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ramp")
            .field("sink", &self.sink)
            .field("start", &self.start)
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}
