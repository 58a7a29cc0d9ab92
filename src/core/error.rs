//! Error types for launch input and chart drawing.

use std::fmt;

use thiserror::Error;

/// Form field a value was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Velocity,
    Angle,
    Gravity,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Velocity => "velocity",
            Field::Angle => "angle",
            Field::Gravity => "gravity",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}

/// Rejected launch input. The solver is never called when one of these is
/// produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid {field}: '{value}'. Expected a number.")]
    InvalidNumber { field: Field, value: String },

    #[error("Invalid {field}: inputs must be finite numbers.")]
    NonFinite { field: Field },

    #[error("Velocity cannot be negative ({0}).")]
    NegativeSpeed(f64),

    #[error("Gravity must be positive, got {0}.")]
    NonPositiveGravity(f64),

    #[error("Inputs are too large to simulate: the flight overflows.")]
    Overflow,

    #[error("Unknown planet '{0}'. Expected earth, moon, mars or custom.")]
    UnknownPlanet(String),
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart canvas must be at least 1x1 pixels, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("chart drawing failed: {0}")]
    Drawing(String),
}
