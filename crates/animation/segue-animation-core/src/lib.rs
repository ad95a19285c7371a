//! Segue Animation Core (engine-agnostic)
//!
//! Small, frame-driven animation primitives that push time-based changes onto
//! external state. Every animation implements the two-method [`Animation`]
//! contract (`start`, `update(dt) -> running`); composites forward `update`
//! to whichever child should currently advance.
//!
//! - [`Ramp`]: interpolates one scalar from a sampled start to a target.
//! - [`Delay`]: waits without writing anything.
//! - [`Sequence`]: runs children one at a time, optionally looping.
//! - [`Crossfade`]: fade-out, switch action, fade-in over a single sink.
//! - [`Director`]: hosts top-level animations and validates frame deltas.
//!
//! Time is pushed in by the host loop; nothing here reads a clock.

pub mod animation;
pub mod config;
pub mod crossfade;
pub mod data;
pub mod delay;
pub mod director;
pub mod error;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod ramp;
pub mod sequence;
pub mod sink;

// Re-exports for consumers (adapters)
pub use animation::{Animation, AnimationExt};
pub use config::Config;
pub use crossfade::{Crossfade, CrossfadePhase};
pub use data::{parse_sequence_json, EasingData, SequenceData, StepData};
pub use delay::Delay;
pub use director::Director;
pub use error::{AnimationError, Result};
pub use ids::{AnimId, IdAllocator};
pub use interp::{Easing, Interpolate};
pub use outputs::{CoreEvent, Outputs};
pub use ramp::Ramp;
pub use sequence::{Sequence, SequenceBuilder};
pub use sink::{SharedValue, ValueSink};
