//! Closed-form kinematics for a projectile under constant gravity.
//!
//! No drag and no wind: the path is the parabola
//! `y(t) = h0 + vy*t - g*t^2/2`, `x(t) = vx*t`.

use serde::Serialize;

/// Number of equal time steps between launch and landing.
/// A non-degenerate solve always yields `SAMPLE_INTERVALS + 1` samples.
pub const SAMPLE_INTERVALS: usize = 200;

/// Horizontal speeds smaller than this are treated as exactly zero, so a
/// 90 degree launch does not drift sideways through `cos` rounding.
pub const VERTICAL_SNAP_EPSILON: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchParameters {
    pub height_m: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    /// Must be positive. The solver does not check this.
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    pub const fn new(height_m: f64, speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> Self {
        Self {
            height_m,
            speed_mps,
            angle_deg,
            gravity_mps2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    pub sample_intervals: usize,
    pub vertical_snap_epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            sample_intervals: SAMPLE_INTERVALS,
            vertical_snap_epsilon: VERTICAL_SNAP_EPSILON,
        }
    }
}

/// One point on the flight path. Height never goes below the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub distance_m: f64,
    pub height_m: f64,
}

/// Output of a single solve.
///
/// `samples` is empty only when the projectile never reaches the ground
/// (no real landing time); every scalar is zero in that case.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub samples: Vec<TrajectorySample>,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
}

impl TrajectoryResult {
    pub fn no_landing() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn launch_point(&self) -> Option<TrajectorySample> {
        self.samples.first().copied()
    }

    pub fn landing_point(&self) -> Option<TrajectorySample> {
        self.samples.last().copied()
    }
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

/// Unclamped position at `time_s` seconds after launch.
pub fn position_at(params: LaunchParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    (vx * time_s, height_at(params, vy, time_s))
}

fn height_at(params: LaunchParameters, vy: f64, time_s: f64) -> f64 {
    params.height_m + (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s)
}

/// Larger root of `h0 + vy*t - g*t^2/2 = 0`, or `None` when the
/// discriminant is negative.
///
/// The larger root is taken even when both roots are negative or both are
/// positive (`h0 < 0`).
fn landing_time(params: LaunchParameters, vy: f64) -> Option<f64> {
    let a = -0.5 * params.gravity_mps2;
    let b = vy;
    let c = params.height_m;

    let disc = (b * b) - (4.0 * a * c);
    if disc < 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let t1 = (-b + root) / (2.0 * a);
    let t2 = (-b - root) / (2.0 * a);
    Some(t1.max(t2))
}

pub fn solve(params: LaunchParameters) -> TrajectoryResult {
    solve_with(params, &SolverConfig::default())
}

pub fn solve_with(params: LaunchParameters, config: &SolverConfig) -> TrajectoryResult {
    let (mut vx, vy) = velocity_components(params);
    if vx.abs() < config.vertical_snap_epsilon {
        vx = 0.0;
    }

    let Some(flight_time_s) = landing_time(params, vy) else {
        return TrajectoryResult::no_landing();
    };

    let range_m = vx * flight_time_s;
    let max_height_m = params.height_m + (vy * vy) / (2.0 * params.gravity_mps2);

    let intervals = config.sample_intervals.max(1);
    let samples = (0..=intervals)
        .map(|i| {
            let t = (i as f64 * flight_time_s) / intervals as f64;
            let y = height_at(params, vy, t);
            TrajectorySample {
                distance_m: vx * t,
                height_m: if y < 0.0 { 0.0 } else { y },
            }
        })
        .collect();

    TrajectoryResult {
        samples,
        flight_time_s,
        range_m,
        max_height_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH_G: f64 = 9.8;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_values_for_flat_ground() {
        let result = solve(LaunchParameters::new(0.0, 20.0, 45.0, EARTH_G));

        assert_close(result.flight_time_s, 2.886, 0.001);
        assert_close(result.range_m, 40.816, 0.001);
        assert_close(result.max_height_m, 10.204, 0.001);
        assert_eq!(result.samples.len(), SAMPLE_INTERVALS + 1);
    }

    #[test]
    fn first_sample_is_launch_point_and_last_is_landing() {
        let result = solve(LaunchParameters::new(12.0, 30.0, 30.0, EARTH_G));

        let launch = result.launch_point().expect("has samples");
        assert_close(launch.distance_m, 0.0, 1e-12);
        assert_close(launch.height_m, 12.0, 1e-12);

        let landing = result.landing_point().expect("has samples");
        assert_close(landing.distance_m, result.range_m, 1e-9);
        assert_close(landing.height_m, 0.0, 1e-9);
    }

    #[test]
    fn elevated_drop_matches_free_fall_time() {
        // (vy + sqrt(vy^2 + 2gh)) / g
        let params = LaunchParameters::new(2.0, 0.0, 10.0, EARTH_G);
        let result = solve(params);

        assert_close(result.flight_time_s, 0.6389, 0.001);
        assert_close(result.range_m, 0.0, 1e-12);
        assert_close(result.max_height_m, 2.0, 1e-12);
    }

    #[test]
    fn vertical_launch_has_exactly_zero_range() {
        for speed in [1.0, 20.0, 350.0, 1000.0] {
            let result = solve(LaunchParameters::new(0.0, speed, 90.0, EARTH_G));
            assert_eq!(result.range_m, 0.0, "speed={speed}");
            assert!(result.samples.iter().all(|s| s.distance_m == 0.0));
        }
    }

    #[test]
    fn raw_components_are_not_snapped() {
        let (vx, _) = velocity_components(LaunchParameters::new(0.0, 20.0, 90.0, EARTH_G));
        assert!(vx != 0.0);
        assert!(vx.abs() < VERTICAL_SNAP_EPSILON);
    }

    #[test]
    fn zero_snap_epsilon_keeps_rounding_drift() {
        let config = SolverConfig {
            vertical_snap_epsilon: 0.0,
            ..SolverConfig::default()
        };
        let result = solve_with(LaunchParameters::new(0.0, 20.0, 90.0, EARTH_G), &config);
        assert!(result.range_m != 0.0);
        assert!(result.range_m.abs() < 1e-12);
    }

    #[test]
    fn negative_discriminant_yields_empty_result() {
        let result = solve(LaunchParameters::new(-100.0, 1.0, -89.0, EARTH_G));

        assert!(result.is_empty());
        assert_eq!(result.flight_time_s, 0.0);
        assert_eq!(result.range_m, 0.0);
        assert_eq!(result.max_height_m, 0.0);
        assert_eq!(result, TrajectoryResult::no_landing());
    }

    #[test]
    fn sub_ground_launch_with_enough_lift_takes_larger_root() {
        // Both roots are positive here; the later crossing wins.
        let params = LaunchParameters::new(-5.0, 20.0, 90.0, EARTH_G);
        let result = solve(params);

        let vy: f64 = 20.0;
        let disc = vy * vy + 2.0 * EARTH_G * -5.0;
        let expected = (vy + disc.sqrt()) / EARTH_G;
        assert_close(result.flight_time_s, expected, 1e-9);
        assert_eq!(result.launch_point().map(|s| s.height_m), Some(0.0));
    }

    #[test]
    fn heights_are_never_negative() {
        let result = solve(LaunchParameters::new(3.0, 45.0, -20.0, EARTH_G));
        assert!(result.samples.iter().all(|s| s.height_m >= 0.0));
    }

    #[test]
    fn obtuse_angle_travels_backwards() {
        let result = solve(LaunchParameters::new(0.0, 20.0, 135.0, EARTH_G));
        assert!(result.range_m < 0.0);
        assert_close(result.range_m, -40.816, 0.001);
    }

    #[test]
    fn zero_speed_on_ground_stays_put() {
        let result = solve(LaunchParameters::new(0.0, 0.0, 45.0, EARTH_G));
        assert_eq!(result.flight_time_s.abs(), 0.0);
        assert_eq!(result.samples.len(), SAMPLE_INTERVALS + 1);
        assert!(result.samples.iter().all(|s| s.height_m == 0.0));
    }

    #[test]
    fn custom_interval_count_changes_resolution() {
        let config = SolverConfig {
            sample_intervals: 10,
            ..SolverConfig::default()
        };
        let result = solve_with(LaunchParameters::new(0.0, 20.0, 45.0, EARTH_G), &config);
        assert_eq!(result.samples.len(), 11);
    }

    #[test]
    fn position_at_is_unclamped() {
        let params = LaunchParameters::new(0.0, 10.0, 0.0, EARTH_G);
        let (x, y) = position_at(params, 1.0);
        assert_close(x, 10.0, 1e-12);
        assert_close(y, -4.9, 1e-12);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let params = LaunchParameters::new(1.5, 33.0, 52.0, 3.71);
        assert_eq!(solve(params), solve(params));
    }
}
