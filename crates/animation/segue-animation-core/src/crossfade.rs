//! Crossfade coordinator: fade-out, switch action, fade-in over one sink.
//!
//! Ordering per `update`:
//! 1. While fading out, only the fade-out ramp is advanced. On the call where
//!    it finishes, the switch action runs (same call) and the fade-in ramp is
//!    restarted so it samples the silenced value.
//! 2. The fade-in ramp is first advanced on the following call, so it never
//!    writes to the sink before the switch happened.

use std::fmt;

use log::debug;

use crate::animation::Animation;
use crate::error::Result;
use crate::ramp::Ramp;
use crate::sink::ValueSink;

/// Which ramp slot is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossfadePhase {
    FadingOut,
    FadingIn,
    Done,
}

pub struct Crossfade<S: ValueSink> {
    fade_out: Ramp<S>,
    fade_in: Ramp<S>,
    switch: Box<dyn FnMut()>,
    phase: CrossfadePhase,
}

impl<S: ValueSink + Clone> Crossfade<S> {
    /// Build an unstarted crossfade. `switch` runs once per `start`, at the
    /// moment the fade-out reaches `silence`.
    pub fn new<F, A>(
        sink: S,
        silence: f32,
        nominal: f32,
        out_duration: f32,
        in_duration: f32,
        interpolate: F,
        switch: A,
    ) -> Result<Self>
    where
        F: Fn(f32, f32, f32) -> f32 + Clone + 'static,
        A: FnMut() + 'static,
    {
        let fade_out = Ramp::new(sink.clone(), silence, out_duration, interpolate.clone())?;
        let fade_in = Ramp::new(sink, nominal, in_duration, interpolate)?;
        Ok(Self {
            fade_out,
            fade_in,
            switch: Box::new(switch),
            phase: CrossfadePhase::Done,
        })
    }

    /// Build and start in one step.
    pub fn started<F, A>(
        sink: S,
        silence: f32,
        nominal: f32,
        out_duration: f32,
        in_duration: f32,
        interpolate: F,
        switch: A,
    ) -> Result<Self>
    where
        F: Fn(f32, f32, f32) -> f32 + Clone + 'static,
        A: FnMut() + 'static,
    {
        let mut fade = Self::new(
            sink,
            silence,
            nominal,
            out_duration,
            in_duration,
            interpolate,
            switch,
        )?;
        fade.start();
        Ok(fade)
    }
}

impl<S: ValueSink> Crossfade<S> {
    pub fn phase(&self) -> CrossfadePhase {
        self.phase
    }

    pub fn fade_out(&self) -> &Ramp<S> {
        &self.fade_out
    }

    pub fn fade_in(&self) -> &Ramp<S> {
        &self.fade_in
    }
}

impl<S: ValueSink> Animation for Crossfade<S> {
    fn start(&mut self) {
        self.fade_out.start();
        self.fade_in.start();
        self.phase = CrossfadePhase::FadingOut;
    }

    fn update(&mut self, dt: f32) -> bool {
        match self.phase {
            CrossfadePhase::FadingOut => {
                if !self.fade_out.update(dt) {
                    debug!("crossfade: fade-out complete, switching");
                    (self.switch)();
                    self.fade_in.start();
                    self.phase = CrossfadePhase::FadingIn;
                }
                true
            }
            CrossfadePhase::FadingIn => {
                if self.fade_in.update(dt) {
                    true
                } else {
                    debug!("crossfade: fade-in complete");
                    self.phase = CrossfadePhase::Done;
                    false
                }
            }
            CrossfadePhase::Done => false,
        }
    }
}

impl<S: ValueSink> fmt::Debug for Crossfade<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crossfade")
            .field("phase", &self.phase)
            .field("out_elapsed", &self.fade_out.elapsed())
            .field("in_elapsed", &self.fade_in.elapsed())
            .finish_non_exhaustive()
    }
}
