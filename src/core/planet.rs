use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::{Field, InputError};
use crate::core::input::parse_field;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const MOON_GRAVITY_MPS2: f64 = 1.62;
pub const MARS_GRAVITY_MPS2: f64 = 3.71;

/// Gravity source for a launch. `Custom` reads the gravity the user typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    #[default]
    Earth,
    Moon,
    Mars,
    Custom,
}

impl Planet {
    pub const ALL: [Planet; 4] = [Planet::Earth, Planet::Moon, Planet::Mars, Planet::Custom];

    pub fn gravity_mps2(self) -> Option<f64> {
        match self {
            Planet::Earth => Some(EARTH_GRAVITY_MPS2),
            Planet::Moon => Some(MOON_GRAVITY_MPS2),
            Planet::Mars => Some(MARS_GRAVITY_MPS2),
            Planet::Custom => None,
        }
    }

    /// Gravity for this selection. Fixed planets never look at `entered`.
    pub fn resolve_gravity(self, entered: &str) -> Result<f64, InputError> {
        match self.gravity_mps2() {
            Some(g) => Ok(g),
            None => parse_field(Field::Gravity, entered),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Planet::Earth => "Earth",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Custom => "Custom",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Self {
        Self::ALL.get(idx).copied().unwrap_or_default()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Planet {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownPlanet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_planets_use_lookup_table() {
        assert_eq!(Planet::Earth.resolve_gravity("ignored"), Ok(9.8));
        assert_eq!(Planet::Moon.resolve_gravity(""), Ok(1.62));
        assert_eq!(Planet::Mars.resolve_gravity("abc"), Ok(3.71));
    }

    #[test]
    fn custom_reads_entered_gravity() {
        assert_eq!(Planet::Custom.resolve_gravity(" 24.79 "), Ok(24.79));
        assert!(matches!(
            Planet::Custom.resolve_gravity("heavy"),
            Err(InputError::InvalidNumber {
                field: Field::Gravity,
                ..
            })
        ));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("moon".parse::<Planet>(), Ok(Planet::Moon));
        assert_eq!("MARS".parse::<Planet>(), Ok(Planet::Mars));
        assert_eq!(" Custom ".parse::<Planet>(), Ok(Planet::Custom));
        assert_eq!(
            "venus".parse::<Planet>(),
            Err(InputError::UnknownPlanet("venus".to_string()))
        );
    }

    #[test]
    fn index_round_trips_through_combo_position() {
        for planet in Planet::ALL {
            assert_eq!(Planet::from_index(planet.index()), planet);
        }
        assert_eq!(Planet::from_index(99), Planet::Earth);
    }
}
