//! Data-driven sequences: JSON descriptions of ramps, delays and nested
//! sequences that build into a started [`Sequence`].
//!
//! ```json
//! { "looping": false,
//!   "steps": [
//!     { "kind": "ramp", "target": 1.0, "duration": 1.0 },
//!     { "kind": "delay", "duration": 0.5 },
//!     { "kind": "ramp", "target": 0.0, "duration": 2.0, "easing": "smoothstep" } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::delay::Delay;
use crate::error::{AnimationError, Result};
use crate::interp::Easing;
use crate::ramp::Ramp;
use crate::sequence::Sequence;
use crate::sink::ValueSink;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceData {
    #[serde(default)]
    pub looping: bool,
    pub steps: Vec<StepData>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepData {
    Ramp {
        target: f32,
        /// Seconds.
        duration: f32,
        #[serde(default)]
        easing: EasingData,
    },
    Delay {
        duration: f32,
    },
    Sequence(SequenceData),
}

/// Easing as written in JSON: a name (`"smoothstep"`) or bezier control
/// points (`{ "cubic_bezier": [x1, y1, x2, y2] }`). Names are resolved by
/// [`Easing::from_name`] during validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingData {
    Named(String),
    CubicBezier { cubic_bezier: [f32; 4] },
}

impl Default for EasingData {
    fn default() -> Self {
        Self::Named("linear".to_string())
    }
}

impl EasingData {
    pub fn resolve(&self) -> Result<Easing> {
        match self {
            Self::Named(name) => Easing::from_name(name),
            Self::CubicBezier { cubic_bezier } => Ok(Easing::CubicBezier(*cubic_bezier)),
        }
    }
}

/// Parse a sequence description.
pub fn parse_sequence_json(s: &str) -> Result<SequenceData> {
    let data: SequenceData = serde_json::from_str(s)?;
    data.validate()?;
    Ok(data)
}

impl SequenceData {
    /// Check durations and emptiness at every nesting level.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        for step in &self.steps {
            match step {
                StepData::Ramp {
                    duration, easing, ..
                } => {
                    crate::error::check_duration(*duration)?;
                    easing.resolve()?;
                }
                StepData::Delay { duration } => {
                    crate::error::check_duration(*duration)?;
                }
                StepData::Sequence(inner) => inner.validate()?,
            }
        }
        Ok(())
    }

    /// Total seconds of one pass (nested loops counted once).
    pub fn duration(&self) -> f32 {
        self.steps
            .iter()
            .map(|step| match step {
                StepData::Ramp { duration, .. } | StepData::Delay { duration } => *duration,
                StepData::Sequence(inner) => inner.duration(),
            })
            .sum()
    }

    /// Build a started sequence whose ramps all write to clones of `sink`.
    pub fn build<S>(&self, sink: &S) -> Result<Sequence>
    where
        S: ValueSink + Clone + 'static,
    {
        let mut seq = self.build_unstarted(sink)?;
        seq.start();
        Ok(seq)
    }

    fn build_unstarted<S>(&self, sink: &S) -> Result<Sequence>
    where
        S: ValueSink + Clone + 'static,
    {
        let mut children: Vec<Box<dyn Animation>> = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let child: Box<dyn Animation> = match step {
                StepData::Ramp {
                    target,
                    duration,
                    easing,
                } => Box::new(Ramp::with_easing(
                    sink.clone(),
                    *target,
                    *duration,
                    easing.resolve()?,
                )?),
                StepData::Delay { duration } => Box::new(Delay::new(*duration)?),
                StepData::Sequence(inner) => Box::new(inner.build_unstarted(sink)?),
            };
            children.push(child);
        }
        Sequence::new(children, self.looping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SharedValue;

    #[test]
    fn nested_empty_sequence_is_rejected() {
        let err = parse_sequence_json(
            r#"{ "steps": [ { "kind": "sequence", "steps": [] } ] }"#,
        )
        .unwrap_err();
        assert_eq!(err, AnimationError::EmptySequence);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = parse_sequence_json(r#"{ "steps": [ { "kind": "delay", "duration": -1 } ] }"#)
            .unwrap_err();
        assert!(matches!(err, AnimationError::InvalidDuration { .. }));
    }

    #[test]
    fn unknown_easing_name_is_config_error() {
        let err = parse_sequence_json(
            r#"{ "steps": [ { "kind": "ramp", "target": 1.0, "duration": 1.0, "easing": "bouncy" } ] }"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AnimationError::UnknownEasing {
                name: "bouncy".to_string()
            }
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn unknown_nested_easing_fails_build_too() {
        let data = SequenceData {
            looping: false,
            steps: vec![StepData::Ramp {
                target: 1.0,
                duration: 1.0,
                easing: EasingData::Named("wobbly".to_string()),
            }],
        };
        let err = data.build(&SharedValue::new(0.0)).unwrap_err();
        assert!(matches!(err, AnimationError::UnknownEasing { .. }));
    }

    #[test]
    fn easing_forms_resolve() {
        let data = parse_sequence_json(
            r#"{ "steps": [
                { "kind": "ramp", "target": 1.0, "duration": 1.0 },
                { "kind": "ramp", "target": 0.0, "duration": 1.0, "easing": "ease_in_quad" },
                { "kind": "ramp", "target": 1.0, "duration": 1.0, "easing": { "cubic_bezier": [0.0, 0.0, 1.0, 1.0] } }
            ] }"#,
        )
        .unwrap();
        let resolved: Vec<Easing> = data
            .steps
            .iter()
            .map(|step| match step {
                StepData::Ramp { easing, .. } => easing.resolve().unwrap(),
                other => panic!("unexpected step {other:?}"),
            })
            .collect();
        assert_eq!(
            resolved,
            vec![
                Easing::Linear,
                Easing::EaseInQuad,
                Easing::CubicBezier([0.0, 0.0, 1.0, 1.0])
            ]
        );
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = parse_sequence_json(r#"{ "steps": [ { "kind": "wobble" } ] }"#).unwrap_err();
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn nested_sequence_runs_inline() {
        let data = parse_sequence_json(
            r#"{ "steps": [
                { "kind": "sequence", "steps": [ { "kind": "ramp", "target": 2.0, "duration": 1.0 } ] },
                { "kind": "ramp", "target": 0.0, "duration": 1.0 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(data.duration(), 2.0);

        let value = SharedValue::new(0.0);
        let mut seq = data.build(&value).unwrap();
        assert!(seq.update(0.5));
        assert_eq!(value.get(), 1.0);
        assert!(seq.update(0.5));
        assert_eq!(value.get(), 2.0);
        assert_eq!(seq.cursor(), Some(1));
        assert!(seq.update(0.5));
        assert_eq!(value.get(), 1.0);
        assert!(!seq.update(0.5));
        assert_eq!(value.get(), 0.0);
    }
}
