//! Sequential composite: runs its children one at a time, in order.
//!
//! State machine over the cursor:
//! - `Some(i)`: child `i` is the only active child and receives `update`.
//! - `None`: finished (or never started); `update` is a no-op returning false.
//!
//! When a child reports finished, the next child is started in the same call
//! but not updated until the following frame, so each `update` causes at most
//! one transition.

use std::fmt;

use log::debug;

use crate::animation::Animation;
use crate::error::{AnimationError, Result};

pub struct Sequence {
    children: Vec<Box<dyn Animation>>,
    cursor: Option<usize>,
    looping: bool,
}

impl Sequence {
    /// Build an unstarted sequence. Fails on an empty child list.
    pub fn new(children: Vec<Box<dyn Animation>>, looping: bool) -> Result<Self> {
        if children.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        Ok(Self {
            children,
            cursor: None,
            looping,
        })
    }

    pub fn builder() -> SequenceBuilder {
        SequenceBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the active child, `None` once finished.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.is_none()
    }
}

impl Animation for Sequence {
    fn start(&mut self) {
        self.cursor = Some(0);
        self.children[0].start();
    }

    fn update(&mut self, dt: f32) -> bool {
        let Some(i) = self.cursor else {
            return false;
        };
        if self.children[i].update(dt) {
            return true;
        }

        let next = if i + 1 < self.children.len() {
            Some(i + 1)
        } else if self.looping {
            debug!("sequence wrapped after child {i}");
            Some(0)
        } else {
            None
        };
        self.cursor = next;
        match next {
            Some(j) => {
                self.children[j].start();
                true
            }
            None => {
                debug!("sequence of {} finished", self.children.len());
                false
            }
        }
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.children.len())
            .field("cursor", &self.cursor)
            .field("looping", &self.looping)
            .finish()
    }
}

/// Fluent construction; `build` returns a started sequence.
#[derive(Default)]
pub struct SequenceBuilder {
    children: Vec<Box<dyn Animation>>,
    looping: bool,
}

impl SequenceBuilder {
    pub fn then<A: Animation + 'static>(mut self, anim: A) -> Self {
        self.children.push(Box::new(anim));
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn build(self) -> Result<Sequence> {
        let mut seq = Sequence::new(self.children, self.looping)?;
        seq.start();
        Ok(seq)
    }
}
