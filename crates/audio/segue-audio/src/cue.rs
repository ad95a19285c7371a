//! One-shot sound effects as leaf animations.

use segue_animation_core::Animation;

/// A playable sound-effect instance supplied by the host.
pub trait Voice {
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Plays its voice on `start` and runs for as long as the voice plays.
#[derive(Debug)]
pub struct Cue<V: Voice> {
    voice: V,
    stopped: bool,
}

impl<V: Voice> Cue<V> {
    pub fn new(voice: V) -> Self {
        Self {
            voice,
            stopped: false,
        }
    }

    /// Stop the sound immediately. The next `update` reports finished.
    pub fn stop(&mut self) {
        self.voice.stop();
        self.stopped = true;
    }

    pub fn voice(&self) -> &V {
        &self.voice
    }
}

impl<V: Voice> Animation for Cue<V> {
    fn start(&mut self) {
        self.stopped = false;
        self.voice.play();
    }

    fn update(&mut self, _dt: f32) -> bool {
        !self.stopped && self.voice.is_playing()
    }
}
