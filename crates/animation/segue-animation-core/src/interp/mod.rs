//! Interpolation functions and the serialisable easing selector.
//!
//! Ramps take any `Fn(start, end, fraction) -> value`; [`Easing`] is the data
//! form used by configs and JSON sequences.

pub mod functions;

use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};

/// Plain interpolation function: `(start, end, fraction) -> value`.
pub type Interpolate = fn(f32, f32, f32) -> f32;

/// Named value curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    Step,
    Smoothstep,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutCubic,
    /// Cubic-bezier timing with control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Evaluate the curve between `start` and `end`.
    #[inline]
    pub fn apply(&self, start: f32, end: f32, t: f32) -> f32 {
        match self {
            Self::Linear => functions::lerp(start, end, t),
            Self::Step => functions::step(start, end, t),
            Self::Smoothstep => functions::smoothstep(start, end, t),
            Self::EaseInQuad => functions::ease_in_quad(start, end, t),
            Self::EaseOutQuad => functions::ease_out_quad(start, end, t),
            Self::EaseInOutCubic => functions::ease_in_out_cubic(start, end, t),
            Self::CubicBezier(ctrl) => {
                functions::lerp(start, end, functions::bezier_ease(t, *ctrl))
            }
        }
    }

    /// Plain function for the non-parametric variants.
    pub fn as_fn(&self) -> Option<Interpolate> {
        match self {
            Self::Linear => Some(functions::lerp),
            Self::Step => Some(functions::step),
            Self::Smoothstep => Some(functions::smoothstep),
            Self::EaseInQuad => Some(functions::ease_in_quad),
            Self::EaseOutQuad => Some(functions::ease_out_quad),
            Self::EaseInOutCubic => Some(functions::ease_in_out_cubic),
            Self::CubicBezier(_) => None,
        }
    }

    /// Look up a non-parametric easing by its snake_case name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(Self::Linear),
            "step" => Ok(Self::Step),
            "smoothstep" => Ok(Self::Smoothstep),
            "ease_in_quad" => Ok(Self::EaseInQuad),
            "ease_out_quad" => Ok(Self::EaseOutQuad),
            "ease_in_out_cubic" => Ok(Self::EaseInOutCubic),
            _ => Err(AnimationError::UnknownEasing {
                name: name.to_string(),
            }),
        }
    }

    /// Closure form accepted by [`Ramp`](crate::Ramp).
    pub fn into_fn(self) -> impl Fn(f32, f32, f32) -> f32 + Clone + 'static {
        move |a, b, t| self.apply(a, b, t)
    }
}
