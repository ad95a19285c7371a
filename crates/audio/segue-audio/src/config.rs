//! Music controller configuration.

use serde::{Deserialize, Serialize};

use segue_animation_core::{AnimationError, Easing, Result};

/// Defaults for [`Jukebox`](crate::Jukebox) transitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Volume the fade-in ramps to and immediate `play` sets.
    pub nominal_volume: f32,
    /// Volume the fade-out ramps to before switching tracks.
    pub silence: f32,
    pub fade_out_secs: f32,
    pub fade_in_secs: f32,
    pub easing: Easing,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            nominal_volume: 1.0,
            silence: 0.0,
            fade_out_secs: 1.0,
            fade_in_secs: 1.0,
            easing: Easing::Linear,
        }
    }
}

impl FadeConfig {
    pub fn validate(&self) -> Result<()> {
        for duration in [self.fade_out_secs, self.fade_in_secs] {
            if !duration.is_finite() || duration < 0.0 {
                return Err(AnimationError::InvalidDuration { duration });
            }
        }
        Ok(())
    }
}
