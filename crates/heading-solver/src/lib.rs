//! heading-solver
//!
//! Closed-form wind-triangle solver.
//!
//! Given true course (TC), true airspeed (TAS), wind direction (WD, the
//! direction the wind blows *from*) and wind speed (WS), find the true heading
//! (TH) to fly and the resulting ground speed (GS).
//!
//! Maths:
//!   δ  = TC − WD
//!   GS = −WS·cos δ + √(TAS² − WS²·sin² δ)
//!   TH = atan2(GS·sin TC + WS·sin WD, GS·cos TC + WS·cos WD)
//!
//! `WS·cos δ` is the headwind along the course line and `WS·sin δ` the
//! crosswind; the square root is real only while TAS can cancel the crosswind.
//! The heading is the direction of the ground vector plus the wind "from"
//! vector, i.e. the air vector the aircraft has to fly.
//!
//! Rounding:
//! - heading is rounded to the nearest degree (ties to even) and wrapped
//!   into `[0, 360)`;
//! - ground speed is always floored, so fuel/time estimates built on it never
//!   assume more speed than the triangle gives.

use heading_core::{
    check_field, normalize_degrees, signed_degrees, Field, InputError, Polar, Wind,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The four inputs of a wind triangle, in whole degrees and speed units.
///
/// Speeds only need to share a unit (kt, km/h, ...). Nothing here is range
/// checked; use [`WindTriangle::checked`] at an input boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindTriangle {
    pub true_course: i32,    // degrees
    pub true_airspeed: i32,  // speed units
    pub wind_direction: i32, // degrees, wind FROM
    pub wind_speed: i32,     // speed units
}

/// Heading to fly and the floored ground speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    pub heading: i32,      // [0, 360)
    pub ground_speed: i64, // >= 0; up to twice i32::MAX for extreme inputs
}

impl Solution {
    /// Signed angle from `true_course` to the heading, in `[-180, 180)`.
    /// Positive means the nose points right of the course.
    pub fn wind_correction_angle(&self, true_course: i32) -> i32 {
        signed_degrees(self.heading - normalize_degrees(true_course))
    }
}

impl WindTriangle {
    pub fn new(true_course: i32, true_airspeed: i32, wind_direction: i32, wind_speed: i32) -> Self {
        Self { true_course, true_airspeed, wind_direction, wind_speed }
    }

    /// Build a triangle from raw entries, requiring each to be within `0..=999`.
    pub fn checked(
        true_course: i64,
        true_airspeed: i64,
        wind_direction: i64,
        wind_speed: i64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            true_course: check_field(Field::TrueCourse, true_course)?,
            true_airspeed: check_field(Field::TrueAirspeed, true_airspeed)?,
            wind_direction: check_field(Field::WindDirection, wind_direction)?,
            wind_speed: check_field(Field::WindSpeed, wind_speed)?,
        })
    }

    /// Solve the triangle. `None` means the wind cannot be compensated: the
    /// crosswind exceeds TAS or the resulting ground speed is not positive.
    pub fn solve(&self) -> Option<Solution> {
        // A blank display (everything zero) shows 0/0 rather than no solution.
        if self.true_airspeed == 0 && self.wind_speed == 0 {
            return Some(Solution { heading: 0, ground_speed: 0 });
        }

        let tc = f64::from(self.true_course);
        let tas = f64::from(self.true_airspeed);
        let wind = Wind::new(f64::from(self.wind_speed), f64::from(self.wind_direction));

        let headwind = wind.headwind(tc);
        let crosswind = wind.crosswind(tc);

        // NaN when the crosswind is stronger than TAS
        let gs = -headwind + (tas * tas - crosswind * crosswind).sqrt();

        if gs.is_nan() || gs <= 0.0 {
            debug!(
                triangle = ?self,
                headwind,
                crosswind,
                "wind triangle has no solution"
            );
            return None;
        }

        let air = Polar::new(gs, tc).to_cartesian() + wind.as_polar().to_cartesian();
        let heading_deg = air.x.atan2(air.y).to_degrees();

        // gs <= |TAS| + |WS| <= 2^32, exactly representable in i64
        #[allow(clippy::cast_possible_truncation)]
        let solution = Solution {
            heading: round_heading(heading_deg),
            ground_speed: gs.floor() as i64,
        };

        trace!(triangle = ?self, ?solution, gs_exact = gs, "wind triangle solved");
        Some(solution)
    }
}

/// Round an `atan2` result in `[-180, 180]` to whole degrees in `[0, 360)`.
#[allow(clippy::cast_possible_truncation)]
fn round_heading(deg: f64) -> i32 {
    normalize_degrees(deg.round_ties_even() as i32)
}

/// Top-level API: true heading and ground speed for one set of inputs.
///
/// Equivalent to `WindTriangle::new(..).solve()`.
pub fn solve(
    true_course: i32,
    true_airspeed: i32,
    wind_direction: i32,
    wind_speed: i32,
) -> Option<Solution> {
    WindTriangle::new(true_course, true_airspeed, wind_direction, wind_speed).solve()
}

/* ----------------------------------- tests ---------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calm_air_flies_the_course() {
        assert_eq!(solve(10, 100, 0, 0), Some(Solution { heading: 10, ground_speed: 100 }));
        assert_eq!(solve(359, 90, 123, 0), Some(Solution { heading: 359, ground_speed: 90 }));
    }

    #[test]
    fn all_zero_shows_zero() {
        assert_eq!(solve(0, 0, 0, 0), Some(Solution { heading: 0, ground_speed: 0 }));
        assert_eq!(solve(275, 0, 42, 0), Some(Solution { heading: 0, ground_speed: 0 }));
    }

    #[test]
    fn reference_values() {
        assert_eq!(solve(60, 80, 120, 20), Some(Solution { heading: 73, ground_speed: 68 }));
        assert_eq!(solve(60, 80, 0, 20), Some(Solution { heading: 47, ground_speed: 68 }));
        assert_eq!(solve(90, 120, 45, 40), Some(Solution { heading: 76, ground_speed: 88 }));
    }

    #[test]
    fn overpowering_crosswind_has_no_solution() {
        assert_eq!(solve(0, 10, 90, 50), None);
    }

    #[test]
    fn headwind_stronger_than_tas_has_no_solution() {
        // Wind right on the nose, ground speed would be negative
        assert_eq!(solve(0, 50, 0, 80), None);
        // Exactly cancelled: ground speed 0 is not a solution either
        assert_eq!(solve(180, 40, 180, 40), None);
    }

    #[test]
    fn no_airspeed_but_wind_has_no_solution() {
        assert_eq!(solve(0, 0, 90, 10), None);
        assert_eq!(solve(0, 0, 0, 10), None);
    }

    #[test]
    fn pure_headwind_and_tailwind() {
        assert_eq!(solve(90, 100, 90, 30), Some(Solution { heading: 90, ground_speed: 70 }));
        assert_eq!(solve(90, 100, 270, 30), Some(Solution { heading: 90, ground_speed: 130 }));
    }

    #[test]
    fn heading_wraps_through_north() {
        // Course 000 with wind from the west: crab left, heading just below 360
        let s = solve(0, 100, 270, 20).unwrap();
        assert!(s.heading > 300 && s.heading < 360, "{s:?}");
        assert!(s.wind_correction_angle(0) < 0);

        // Course 350 with wind from the east: crab right, wraps past 360
        let s = solve(350, 100, 90, 30).unwrap();
        assert!(s.heading < 20, "{s:?}");
        assert!(s.wind_correction_angle(350) > 0);
    }

    #[test]
    fn ground_speed_is_floored_not_rounded() {
        // Exact GS is 68.10..., and for (0, 100, 45, 10) about 92.6
        assert_eq!(solve(60, 80, 120, 20).unwrap().ground_speed, 68);
        assert_eq!(solve(0, 100, 45, 10).unwrap().ground_speed, 92);
    }

    #[test]
    fn wind_correction_angle_sign() {
        let s = solve(60, 80, 120, 20).unwrap();
        assert_eq!(s.wind_correction_angle(60), 13);
        let s = solve(60, 80, 0, 20).unwrap();
        assert_eq!(s.wind_correction_angle(60), -13);
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert_eq!(
            WindTriangle::checked(60, 80, 120, 20),
            Ok(WindTriangle::new(60, 80, 120, 20))
        );
        assert!(matches!(
            WindTriangle::checked(60, 1000, 120, 20),
            Err(InputError::OutOfRange { field: Field::TrueAirspeed, .. })
        ));
        assert!(matches!(
            WindTriangle::checked(60, 80, -1, 20),
            Err(InputError::Negative { field: Field::WindDirection, .. })
        ));
    }

    #[test]
    fn extreme_speeds_keep_full_ground_speed() {
        // Straight tailwind: GS = TAS + WS, beyond i32
        let s = solve(0, i32::MAX, 180, i32::MAX).unwrap();
        assert_eq!(s.heading, 0);
        assert_eq!(s.ground_speed, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn heading_ties_round_to_even() {
        assert_eq!(round_heading(72.5), 72);
        assert_eq!(round_heading(73.5), 74);
        assert_eq!(round_heading(72.503), 73);
        assert_eq!(round_heading(-0.5), 0);
        assert_eq!(round_heading(-1.5), 358);
        assert_eq!(round_heading(-179.5), 180);
        assert_eq!(round_heading(179.6), 180);
    }
}
