//! Music controller: crossfades between tracks on a shared device.
//!
//! `fade_to` fades the live volume down to silence, switches the track at the
//! exact frame the fade-out completes, then fades up to the nominal volume.
//! `play` and `stop` bypass any fade and clear the crossfade slot so a stale
//! fade never acts on the new track.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use segue_animation_core::{Animation, Crossfade, CrossfadePhase, Result};

use crate::config::FadeConfig;
use crate::device::{AudioDevice, DeviceVolume};

pub struct Jukebox<D: AudioDevice> {
    device: Rc<RefCell<D>>,
    cfg: FadeConfig,
    current: Rc<RefCell<Option<D::Track>>>,
    fade: Option<Crossfade<DeviceVolume<D>>>,
}

impl<D> Jukebox<D>
where
    D: AudioDevice + 'static,
    D::Track: 'static,
{
    pub fn new(device: D, cfg: FadeConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            device: Rc::new(RefCell::new(device)),
            cfg,
            current: Rc::new(RefCell::new(None)),
            fade: None,
        })
    }

    pub fn device(&self) -> Ref<'_, D> {
        self.device.borrow()
    }

    /// Track the device is currently playing (switched at fade-out end).
    pub fn current_track(&self) -> Option<D::Track> {
        self.current.borrow().clone()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn phase(&self) -> Option<CrossfadePhase> {
        self.fade.as_ref().map(Crossfade::phase)
    }

    /// Crossfade to `track`, replacing any fade in flight. The fade-out starts
    /// from the live volume.
    pub fn fade_to(&mut self, track: D::Track, out_secs: f32, in_secs: f32) -> Result<()> {
        let device = Rc::clone(&self.device);
        let current = Rc::clone(&self.current);
        let fade = Crossfade::started(
            DeviceVolume::new(Rc::clone(&self.device)),
            self.cfg.silence,
            self.cfg.nominal_volume,
            out_secs,
            in_secs,
            self.cfg.easing.into_fn(),
            move || {
                device.borrow_mut().play(&track);
                *current.borrow_mut() = Some(track.clone());
            },
        )?;
        debug!("jukebox: crossfade {out_secs}s out / {in_secs}s in");
        self.fade = Some(fade);
        Ok(())
    }

    /// Crossfade using the configured durations.
    pub fn fade_to_default(&mut self, track: D::Track) -> Result<()> {
        let (out_secs, in_secs) = (self.cfg.fade_out_secs, self.cfg.fade_in_secs);
        self.fade_to(track, out_secs, in_secs)
    }

    /// Switch immediately at nominal volume.
    pub fn play(&mut self, track: D::Track) {
        self.fade = None;
        {
            let mut device = self.device.borrow_mut();
            device.set_volume(self.cfg.nominal_volume);
            device.play(&track);
        }
        *self.current.borrow_mut() = Some(track);
    }

    pub fn stop(&mut self) {
        self.fade = None;
        self.device.borrow_mut().stop();
        *self.current.borrow_mut() = None;
    }

    /// Drive the crossfade by `dt` seconds. Returns whether a fade is still
    /// in progress. A negative or non-finite `dt` is treated as zero.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("jukebox: ignoring frame delta {dt}");
            0.0
        };
        if fade.update(dt) {
            return true;
        }
        debug!("jukebox: crossfade finished");
        self.fade = None;
        false
    }
}
