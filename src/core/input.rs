//! Launch form: raw field text in, validated [`LaunchParameters`] out.

use crate::core::ballistics::LaunchParameters;
use crate::core::error::{Field, InputError};
use crate::core::planet::Planet;

pub fn parse_field(field: Field, value: &str) -> Result<f64, InputError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: value.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(parsed)
}

/// Text of every input field as the user typed it.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchForm {
    pub velocity: String,
    pub angle: String,
    pub gravity: String,
    pub height: String,
    pub planet: Planet,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            velocity: "20".to_string(),
            angle: "45".to_string(),
            gravity: "9.8".to_string(),
            height: "0".to_string(),
            planet: Planet::Earth,
        }
    }
}

impl LaunchForm {
    /// Parses every field. Either all four values come back or none do.
    pub fn to_parameters(&self) -> Result<LaunchParameters, InputError> {
        let speed_mps = parse_field(Field::Velocity, &self.velocity)?;
        let angle_deg = parse_field(Field::Angle, &self.angle)?;
        let height_m = parse_field(Field::Height, &self.height)?;
        let gravity_mps2 = self.planet.resolve_gravity(&self.gravity)?;

        if speed_mps < 0.0 {
            return Err(InputError::NegativeSpeed(speed_mps));
        }
        if gravity_mps2 <= 0.0 {
            return Err(InputError::NonPositiveGravity(gravity_mps2));
        }
        if !flight_fits(speed_mps, height_m, gravity_mps2) {
            return Err(InputError::Overflow);
        }

        Ok(LaunchParameters::new(
            height_m,
            speed_mps,
            angle_deg,
            gravity_mps2,
        ))
    }
}

// Bounds the discriminant, the apex height, the flight time and the range
// without caring about the angle.
fn flight_fits(speed_mps: f64, height_m: f64, gravity_mps2: f64) -> bool {
    let lift = speed_mps * speed_mps;
    let drop = 2.0 * gravity_mps2 * height_m.abs();
    let apex = lift / (2.0 * gravity_mps2);
    let time = (speed_mps + (lift + drop).sqrt()) / gravity_mps2;
    [lift, drop, apex, time, speed_mps * time]
        .iter()
        .all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        velocity: &str,
        angle: &str,
        gravity: &str,
        height: &str,
        planet: Planet,
    ) -> LaunchForm {
        LaunchForm {
            velocity: velocity.to_string(),
            angle: angle.to_string(),
            gravity: gravity.to_string(),
            height: height.to_string(),
            planet,
        }
    }

    #[test]
    fn default_form_is_the_classic_shot() {
        let params = LaunchForm::default().to_parameters().expect("defaults parse");
        assert_eq!(params, LaunchParameters::new(0.0, 20.0, 45.0, 9.8));
    }

    #[test]
    fn trims_whitespace_around_numbers() {
        let params = form(" 12.5 ", "30\n", "1", "\t4", Planet::Custom)
            .to_parameters()
            .expect("should parse");
        assert_eq!(params, LaunchParameters::new(4.0, 12.5, 30.0, 1.0));
    }

    #[test]
    fn reports_the_offending_field() {
        let err = form("20", "steep", "9.8", "0", Planet::Earth)
            .to_parameters()
            .expect_err("angle is not a number");
        assert_eq!(
            err,
            InputError::InvalidNumber {
                field: Field::Angle,
                value: "steep".to_string(),
            }
        );
        assert!(err.to_string().contains("Invalid angle"));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = form("inf", "45", "9.8", "0", Planet::Earth)
            .to_parameters()
            .expect_err("infinite speed");
        assert_eq!(err, InputError::NonFinite { field: Field::Velocity });

        let err = form("20", "NaN", "9.8", "0", Planet::Earth)
            .to_parameters()
            .expect_err("NaN angle");
        assert_eq!(err, InputError::NonFinite { field: Field::Angle });
    }

    #[test]
    fn rejects_negative_speed() {
        let err = form("-3", "45", "9.8", "0", Planet::Earth)
            .to_parameters()
            .expect_err("negative speed");
        assert_eq!(err, InputError::NegativeSpeed(-3.0));
    }

    #[test]
    fn rejects_non_positive_custom_gravity() {
        for g in ["0", "-9.8"] {
            let err = form("20", "45", g, "0", Planet::Custom)
                .to_parameters()
                .expect_err("gravity must be positive");
            assert!(matches!(err, InputError::NonPositiveGravity(_)), "g={g}");
        }
    }

    #[test]
    fn planet_choice_overrides_gravity_field() {
        let params = form("20", "45", "not used", "0", Planet::Moon)
            .to_parameters()
            .expect("moon ignores the gravity field");
        assert_eq!(params.gravity_mps2, 1.62);
    }

    #[test]
    fn negative_height_is_accepted() {
        let params = form("20", "45", "9.8", "-5", Planet::Earth)
            .to_parameters()
            .expect("sub-ground launch is allowed");
        assert_eq!(params.height_m, -5.0);
    }

    #[test]
    fn rejects_inputs_that_overflow_the_flight() {
        let huge_speed = LaunchForm {
            velocity: "1e200".to_string(),
            ..LaunchForm::default()
        };
        assert_eq!(huge_speed.to_parameters(), Err(InputError::Overflow));

        let deep_well = form("20", "45", "1e300", "1e10", Planet::Custom);
        assert_eq!(deep_well.to_parameters(), Err(InputError::Overflow));

        let feather_gravity = form("1e100", "45", "1e-300", "0", Planet::Custom);
        assert_eq!(feather_gravity.to_parameters(), Err(InputError::Overflow));
    }

    #[test]
    fn large_but_representable_inputs_still_solve() {
        let params = form("1e6", "30", "9.8", "1e6", Planet::Earth)
            .to_parameters()
            .expect("fits in f64");
        let result = crate::core::ballistics::solve(params);
        let launch = result.launch_point().expect("lands");
        assert_eq!(launch.distance_m, 0.0);
        assert_eq!(launch.height_m, 1e6);
        assert!(result.range_m.is_finite());
    }
}
