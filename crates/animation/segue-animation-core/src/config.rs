//! Core configuration for segue-animation-core.

use serde::{Deserialize, Serialize};

/// Configuration for director sizing.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity hint for hosted top-level animations.
    pub initial_capacity: usize,

    /// Maximum events to retain per tick; the rest are summarised by
    /// `CoreEvent::EventsDropped`.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_events_per_tick: 256,
        }
    }
}
