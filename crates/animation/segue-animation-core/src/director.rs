//! Director: the frame driver hosting top-level animations.
//!
//! Methods:
//! - new, add, cancel, contains, tick (validate dt → update all → drop finished)

use log::{debug, warn};

use crate::animation::Animation;
use crate::config::Config;
use crate::error::{AnimationError, Result};
use crate::ids::{AnimId, IdAllocator};
use crate::outputs::{CoreEvent, Outputs};

struct Hosted {
    id: AnimId,
    anim: Box<dyn Animation>,
}

/// Owns top-level animations and calls `update` on each once per tick.
pub struct Director {
    cfg: Config,
    ids: IdAllocator,
    active: Vec<Hosted>,
    clock: f32,
    outputs: Outputs,
}

impl Director {
    pub fn new(cfg: Config) -> Self {
        Self {
            active: Vec::with_capacity(cfg.initial_capacity),
            cfg,
            ids: IdAllocator::new(),
            clock: 0.0,
            outputs: Outputs::default(),
        }
    }

    /// Host an animation. It is expected to be started already; the director
    /// only ever calls `update` on it.
    pub fn add<A: Animation + 'static>(&mut self, anim: A) -> AnimId {
        let id = self.ids.alloc_anim();
        debug!("director: hosting {id}");
        self.active.push(Hosted {
            id,
            anim: Box::new(anim),
        });
        id
    }

    /// Drop an animation before it finishes. No further updates reach it.
    pub fn cancel(&mut self, id: AnimId) -> Result<()> {
        let pos = self
            .active
            .iter()
            .position(|h| h.id == id)
            .ok_or(AnimationError::AnimationNotFound { id: id.0 })?;
        self.active.remove(pos);
        debug!("director: cancelled {id}");
        Ok(())
    }

    pub fn contains(&self, id: AnimId) -> bool {
        self.active.iter().any(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Accumulated time of all accepted ticks.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Advance every hosted animation by `dt` seconds, in insertion order.
    ///
    /// A negative or non-finite `dt` is rejected before any animation is
    /// touched.
    pub fn tick(&mut self, dt: f32) -> Result<&Outputs> {
        if !dt.is_finite() || dt < 0.0 {
            warn!("director: rejected frame delta {dt}");
            return Err(AnimationError::InvalidDelta { dt });
        }
        self.outputs.clear();
        self.clock += dt;

        let clock = self.clock;
        let limit = self.cfg.max_events_per_tick;
        let outputs = &mut self.outputs;
        let mut dropped = 0usize;
        self.active.retain_mut(|h| {
            if h.anim.update(dt) {
                return true;
            }
            debug!("director: {} finished at {clock}", h.id);
            if outputs.events.len() < limit {
                outputs.push_event(CoreEvent::Finished { id: h.id, at: clock });
            } else {
                dropped += 1;
            }
            false
        });
        if dropped > 0 {
            self.outputs
                .push_event(CoreEvent::EventsDropped { count: dropped });
        }
        Ok(&self.outputs)
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
