//! Easing curves applied to segment progress before the value blend.
//!
//! The curve is chosen by the *departing* keyframe of a segment.

pub mod functions;

use serde::{Deserialize, Serialize};

use functions::{ease_in, ease_in_out, ease_out, smoothstep};

/// Easing kind of the outgoing segment from a keyframe to the next.
///
/// Documents spell these `linear`, `ease_in`, `ease_out`, `ease_in_out` and
/// `bezier`; any other string reads as `Linear`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Bezier,
}

impl Easing {
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease_in",
            Easing::EaseOut => "ease_out",
            Easing::EaseInOut => "ease_in_out",
            Easing::Bezier => "bezier",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "ease_in" => Easing::EaseIn,
            "ease_out" => Easing::EaseOut,
            "ease_in_out" => Easing::EaseInOut,
            "bezier" => Easing::Bezier,
            _ => Easing::Linear,
        }
    }

    /// Remap raw progress `t` in [0,1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
            Easing::Bezier => smoothstep(t),
        }
    }
}

impl From<String> for Easing {
    fn from(s: String) -> Self {
        Easing::from_name(&s)
    }
}

impl From<Easing> for String {
    fn from(e: Easing) -> Self {
        e.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_falls_back_to_linear() {
        let e: Easing = serde_json::from_str("\"ease_in_out\"").unwrap();
        assert_eq!(e, Easing::EaseInOut);
        let unknown: Easing = serde_json::from_str("\"elastic\"").unwrap();
        assert_eq!(unknown, Easing::Linear);
        assert_eq!(serde_json::to_string(&Easing::Bezier).unwrap(), "\"bezier\"");
    }
}
