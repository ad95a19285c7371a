//! Value sinks: read/write access to the external quantity being animated.

use std::cell::Cell;
use std::rc::Rc;

/// External scalar an animation reads on `start` and writes on `update`.
pub trait ValueSink {
    fn get(&self) -> f32;
    fn set(&mut self, value: f32);
}

/// Cloneable handle to a single-threaded scalar.
///
/// Clones share the same cell, so a host keeps one handle to observe what the
/// animations holding the others have written.
#[derive(Clone, Debug, Default)]
pub struct SharedValue(Rc<Cell<f32>>);

impl SharedValue {
    pub fn new(value: f32) -> Self {
        Self(Rc::new(Cell::new(value)))
    }
}

impl ValueSink for SharedValue {
    #[inline]
    fn get(&self) -> f32 {
        self.0.get()
    }

    #[inline]
    fn set(&mut self, value: f32) {
        self.0.set(value);
    }
}
