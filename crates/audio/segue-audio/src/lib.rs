//! Segue audio adapter.
//!
//! Binds the engine-agnostic animation core to a host audio device: a
//! [`Jukebox`] crossfades music tracks through a [`Crossfade`] driven from the
//! host loop, and a [`Cue`] wraps a one-shot sound effect as a leaf animation.
//! The host supplies the actual playback through [`AudioDevice`] and [`Voice`].

pub mod config;
pub mod cue;
pub mod device;
pub mod jukebox;

pub use config::FadeConfig;
pub use cue::{Cue, Voice};
pub use device::{AudioDevice, DeviceVolume};
pub use jukebox::Jukebox;
pub use segue_animation_core::{Crossfade, CrossfadePhase};
