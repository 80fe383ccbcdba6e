//! Discrete camera control actions.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseControlError;

/// A discrete camera control event from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    OrbitLeft,
    OrbitRight,
    TiltUp,
    TiltDown,
    RollLeft,
    RollRight,
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
}

/// What an action does, with signs expressed as unit multiples of the
/// configured step sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEffect {
    /// Add `sign * orbit_step` to target azimuth.
    Orbit(f64),
    /// Add `sign * tilt_step` to target polar (negated while flipped).
    Tilt(f64),
    /// Add `sign * roll_step` to target roll.
    Roll(f64),
    ZoomIn,
    ZoomOut,
    /// Move pivot and camera by `pan_step` along camera right / up.
    Pan { right: f64, up: f64 },
}

impl ControlAction {
    /// Every action, in declaration order.
    pub const ALL: [ControlAction; 12] = [
        ControlAction::OrbitLeft,
        ControlAction::OrbitRight,
        ControlAction::TiltUp,
        ControlAction::TiltDown,
        ControlAction::RollLeft,
        ControlAction::RollRight,
        ControlAction::ZoomIn,
        ControlAction::ZoomOut,
        ControlAction::PanLeft,
        ControlAction::PanRight,
        ControlAction::PanUp,
        ControlAction::PanDown,
    ];

    /// The kebab-case name of the action.
    pub fn name(self) -> &'static str {
        match self {
            ControlAction::OrbitLeft => "orbit-left",
            ControlAction::OrbitRight => "orbit-right",
            ControlAction::TiltUp => "tilt-up",
            ControlAction::TiltDown => "tilt-down",
            ControlAction::RollLeft => "roll-left",
            ControlAction::RollRight => "roll-right",
            ControlAction::ZoomIn => "zoom-in",
            ControlAction::ZoomOut => "zoom-out",
            ControlAction::PanLeft => "pan-left",
            ControlAction::PanRight => "pan-right",
            ControlAction::PanUp => "pan-up",
            ControlAction::PanDown => "pan-down",
        }
    }

    /// Maps the action to its effect.
    pub fn effect(self) -> ControlEffect {
        match self {
            ControlAction::OrbitLeft => ControlEffect::Orbit(-1.0),
            ControlAction::OrbitRight => ControlEffect::Orbit(1.0),
            ControlAction::TiltUp => ControlEffect::Tilt(-1.0),
            ControlAction::TiltDown => ControlEffect::Tilt(1.0),
            ControlAction::RollLeft => ControlEffect::Roll(-1.0),
            ControlAction::RollRight => ControlEffect::Roll(1.0),
            ControlAction::ZoomIn => ControlEffect::ZoomIn,
            ControlAction::ZoomOut => ControlEffect::ZoomOut,
            ControlAction::PanLeft => ControlEffect::Pan { right: -1.0, up: 0.0 },
            ControlAction::PanRight => ControlEffect::Pan { right: 1.0, up: 0.0 },
            ControlAction::PanUp => ControlEffect::Pan { right: 0.0, up: 1.0 },
            ControlAction::PanDown => ControlEffect::Pan { right: 0.0, up: -1.0 },
        }
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlAction {
    type Err = ParseControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| ParseControlError(s.to_string()))
    }
}
