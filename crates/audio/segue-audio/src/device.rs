//! Host audio device contract and the volume sink over it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use segue_animation_core::ValueSink;

/// Music playback device supplied by the host.
pub trait AudioDevice {
    /// Host handle for a playable track.
    type Track: Clone;

    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    fn play(&mut self, track: &Self::Track);
    fn stop(&mut self);
}

/// [`ValueSink`] reading and writing a shared device's volume.
pub struct DeviceVolume<D>(Rc<RefCell<D>>);

impl<D> DeviceVolume<D> {
    pub fn new(device: Rc<RefCell<D>>) -> Self {
        Self(device)
    }
}

impl<D> Clone for DeviceVolume<D> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<D> fmt::Debug for DeviceVolume<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeviceVolume").finish()
    }
}

impl<D: AudioDevice> ValueSink for DeviceVolume<D> {
    #[inline]
    fn get(&self) -> f32 {
        self.0.borrow().volume()
    }

    #[inline]
    fn set(&mut self, value: f32) {
        self.0.borrow_mut().set_volume(value);
    }
}
