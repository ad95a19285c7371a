//! Output contract from the director.
//!
//! Animations write their values straight into their sinks; outputs only carry
//! the discrete lifecycle events produced during a tick.

use serde::{Deserialize, Serialize};

use crate::ids::AnimId;

/// Discrete signals emitted while ticking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreEvent {
    /// A hosted animation reported not-running and was removed.
    Finished {
        id: AnimId,
        /// Director clock (seconds) after the tick that finished it.
        at: f32,
    },
    /// Events beyond `Config::max_events_per_tick` that were not recorded.
    EventsDropped { count: usize },
}

/// Outputs returned by `Director::tick()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Ids of animations that finished this tick, in update order.
    pub fn finished(&self) -> impl Iterator<Item = AnimId> + '_ {
        self.events.iter().filter_map(|e| match e {
            CoreEvent::Finished { id, .. } => Some(*id),
            _ => None,
        })
    }
}
