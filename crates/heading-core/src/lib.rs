//! Core navigation math utilities
//!
//! Includes:
//! - Compass angle normalisation
//! - Polar (compass convention) vectors backed by nalgebra
//! - Wind representation and course-relative components
//! - Input field identifiers and validation errors

use core::fmt;

use nalgebra::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// -------------------------
/// Angles
/// -------------------------

/// Wrap whole degrees into `[0, 360)`.
pub fn normalize_degrees(deg: i32) -> i32 {
    deg.rem_euclid(360)
}

/// Wrap whole degrees into `[-180, 180)`.
pub fn signed_degrees(deg: i32) -> i32 {
    let d = deg.rem_euclid(360);
    if d >= 180 { d - 360 } else { d }
}

/// -------------------------
/// Vectors
/// -------------------------

/// A vector in polar form using the compass convention: the angle is measured
/// clockwise from north, so 90° points east.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polar {
    pub length: f64,
    pub angle_deg: f64,
}

impl Polar {
    pub fn new(length: f64, angle_deg: f64) -> Self {
        Self { length, angle_deg }
    }

    /// (east, north) components.
    pub fn to_cartesian(self) -> Vector2<f64> {
        let rad = self.angle_deg.to_radians();
        Vector2::new(self.length * rad.sin(), self.length * rad.cos())
    }
}

/// -------------------------
/// Wind
/// -------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    pub speed: f64,
    pub from_deg: f64, // direction the wind blows FROM
}

impl Wind {
    pub fn new(speed: f64, from_deg: f64) -> Self {
        Self { speed, from_deg }
    }

    /// Component along the course line; positive is a headwind.
    pub fn headwind(&self, course_deg: f64) -> f64 {
        let rad = (course_deg - self.from_deg).to_radians();
        self.speed * rad.cos()
    }

    /// Component across the course line; positive means wind from the left.
    pub fn crosswind(&self, course_deg: f64) -> f64 {
        let rad = (course_deg - self.from_deg).to_radians();
        self.speed * rad.sin()
    }

    /// The "from" vector: `speed` pointing toward `from_deg`.
    pub fn as_polar(&self) -> Polar {
        Polar::new(self.speed, self.from_deg)
    }
}

/// -------------------------
/// Inputs
/// -------------------------

/// Largest value a single input field accepts (three digits).
pub const MAX_FIELD_VALUE: i64 = 999;

/// One of the four wind-triangle inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Field {
    TrueCourse,
    TrueAirspeed,
    WindDirection,
    WindSpeed,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::TrueCourse => "true course",
            Field::TrueAirspeed => "true airspeed",
            Field::WindDirection => "wind direction",
            Field::WindSpeed => "wind speed",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: Field, value: i64 },
    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange { field: Field, value: i64, max: i64 },
    #[error("{field} must be a whole number, got {value}")]
    NotInteger { field: Field, value: f64 },
}

/// Check a single field against the `0..=999` range.
pub fn check_field(field: Field, value: i64) -> Result<i32, InputError> {
    if value < 0 {
        return Err(InputError::Negative { field, value });
    }
    if value > MAX_FIELD_VALUE {
        return Err(InputError::OutOfRange { field, value, max: MAX_FIELD_VALUE });
    }
    // 0..=999 always fits
    Ok(i32::try_from(value).unwrap_or(i32::MAX))
}

/// Accept a float only if it carries a whole number, then range-check it.
pub fn check_field_f64(field: Field, value: f64) -> Result<i32, InputError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InputError::NotInteger { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value: value as i64 });
    }
    if value > MAX_FIELD_VALUE as f64 {
        return Err(InputError::OutOfRange {
            field,
            value: value.min(i64::MAX as f64) as i64,
            max: MAX_FIELD_VALUE,
        });
    }
    check_field(field, value as i64)
}

/* -------------------------------- tests -------------------------------- */
