use approx::assert_abs_diff_eq;
use segue_audio::{AudioDevice, CrossfadePhase, FadeConfig, Jukebox};
use segue_test_fixtures::fades;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Volume(f32),
    Play(&'static str),
    Stop,
}

#[derive(Debug)]
struct FakeDevice {
    volume: f32,
    playing: Option<&'static str>,
    calls: Vec<Call>,
}

impl FakeDevice {
    fn new(volume: f32) -> Self {
        Self {
            volume,
            playing: None,
            calls: Vec::new(),
        }
    }

    /// Index of the first `Play(track)` call.
    fn play_index(&self, track: &str) -> Option<usize> {
        self.calls
            .iter()
            .position(|c| matches!(c, Call::Play(t) if *t == track))
    }
}

impl AudioDevice for FakeDevice {
    type Track = &'static str;

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.calls.push(Call::Volume(volume));
    }

    fn play(&mut self, track: &Self::Track) {
        self.playing = Some(track);
        self.calls.push(Call::Play(track));
    }

    fn stop(&mut self) {
        self.playing = None;
        self.calls.push(Call::Stop);
    }
}

fn jukebox() -> Jukebox<FakeDevice> {
    let mut jb = Jukebox::new(FakeDevice::new(0.0), FadeConfig::default()).unwrap();
    jb.play("menu");
    jb
}

#[test]
fn fade_to_switches_exactly_once_at_fade_out_end() {
    let mut jb = jukebox();
    jb.fade_to("battle", 1.0, 1.0).unwrap();

    for _ in 0..3 {
        assert!(jb.update(0.25));
        assert_eq!(jb.current_track(), Some("menu"));
    }
    assert!(jb.update(0.25));
    assert_eq!(jb.current_track(), Some("battle"));
    assert_eq!(jb.device().volume, 0.0);
    assert_eq!(jb.phase(), Some(CrossfadePhase::FadingIn));

    while jb.update(0.25) {}
    assert!(!jb.is_fading());
    assert_eq!(jb.device().volume, 1.0);

    let dev = jb.device();
    let plays: Vec<_> = dev
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Play(_)))
        .collect();
    assert_eq!(plays, vec![&Call::Play("menu"), &Call::Play("battle")]);
}

#[test]
fn no_rising_volume_before_switch() {
    let mut jb = jukebox();
    jb.fade_to("battle", 0.5, 0.5).unwrap();
    while jb.update(0.1) {}

    let dev = jb.device();
    let switch = dev.play_index("battle").unwrap();
    let volumes: Vec<f32> = dev.calls[..switch]
        .iter()
        .filter_map(|c| match c {
            Call::Volume(v) => Some(*v),
            _ => None,
        })
        .collect();
    assert!(volumes.windows(2).all(|w| w[1] <= w[0]), "{volumes:?}");
    assert_eq!(dev.calls[switch - 1], Call::Volume(0.0));
}

#[test]
fn immediate_play_cancels_fade() {
    let mut jb = jukebox();
    jb.fade_to("battle", 1.0, 1.0).unwrap();
    assert!(jb.update(0.5));
    jb.play("victory");
    assert!(!jb.is_fading());
    assert_eq!(jb.device().volume, 1.0);

    // A stale fade must not keep acting on the new track.
    assert!(!jb.update(0.5));
    assert!(!jb.update(0.5));
    assert_eq!(jb.device().volume, 1.0);
    assert_eq!(jb.current_track(), Some("victory"));
    assert!(jb.device().play_index("battle").is_none());
}

#[test]
fn refade_mid_flight_starts_from_live_volume() {
    let mut jb = jukebox();
    jb.fade_to("battle", 1.0, 1.0).unwrap();
    assert!(jb.update(0.5));
    assert_abs_diff_eq!(jb.device().volume, 0.5, epsilon = 1e-6);

    jb.fade_to("victory", 1.0, 1.0).unwrap();
    assert!(jb.update(0.5));
    assert_abs_diff_eq!(jb.device().volume, 0.25, epsilon = 1e-6);
    while jb.update(0.5) {}
    assert_eq!(jb.current_track(), Some("victory"));
    assert!(jb.device().play_index("battle").is_none());
}

#[test]
fn stop_clears_fade_and_track() {
    let mut jb = jukebox();
    jb.fade_to_default("battle").unwrap();
    jb.stop();
    assert!(!jb.update(1.0));
    assert_eq!(jb.current_track(), None);
    assert_eq!(jb.device().playing, None);
    assert_eq!(jb.device().calls.last(), Some(&Call::Stop));
}

#[test]
fn negative_delta_leaves_volume_and_track_alone() {
    let mut jb = jukebox();
    jb.fade_to("battle", 1.0, 1.0).unwrap();
    assert!(jb.update(-0.5));
    assert_eq!(jb.device().volume, 1.0);
    assert!(jb.update(f32::NAN));
    assert!(jb.update(f32::INFINITY));
    assert_eq!(jb.device().volume, 1.0);
    assert_eq!(jb.current_track(), Some("menu"));
    assert_eq!(jb.phase(), Some(CrossfadePhase::FadingOut));

    // Normal frames resume from where the fade was.
    assert!(jb.update(0.5));
    assert_abs_diff_eq!(jb.device().volume, 0.5, epsilon = 1e-6);
}

#[test]
fn negative_delta_while_idle_is_a_no_op() {
    let mut jb = jukebox();
    assert!(!jb.update(-1.0));
    assert_eq!(jb.device().volume, 1.0);
}

#[test]
fn negative_fade_duration_is_config_error() {
    let mut jb = jukebox();
    let err = jb.fade_to("battle", -1.0, 1.0).unwrap_err();
    assert!(err.is_config_error());
    assert!(!jb.is_fading());
}

#[test]
fn fade_config_fixtures_load() {
    let default: FadeConfig = fades::load("default").unwrap();
    assert_eq!(default, FadeConfig::default());

    let slow: FadeConfig = fades::load("slow-eased").unwrap();
    assert_eq!(slow.nominal_volume, 0.8);
    assert_eq!(slow.silence, 0.0);

    let mut jb = Jukebox::new(FakeDevice::new(0.8), slow).unwrap();
    jb.fade_to_default("battle").unwrap();
    let mut frames = 0;
    while jb.update(0.5) {
        frames += 1;
    }
    // 2s out + 3s in at 0.5s per frame; the finishing frame is not counted.
    assert_eq!(frames, 9);
    assert_eq!(jb.device().volume, 0.8);
}
