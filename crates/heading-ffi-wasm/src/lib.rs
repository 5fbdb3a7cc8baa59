// crates/heading-ffi-wasm/src/lib.rs
//
// WASM bindings: wind-triangle solver export.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;

// --- our crates ---
use heading_core::{check_field_f64, Field, InputError};
use heading_solver::WindTriangle;

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

/// JS numbers arrive as f64; they must still hold whole values in 0..=999.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JsWindInput {
    pub true_course: f64,
    pub true_airspeed: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

impl TryFrom<JsWindInput> for WindTriangle {
    type Error = InputError;

    fn try_from(i: JsWindInput) -> Result<Self, Self::Error> {
        Ok(WindTriangle {
            true_course: check_field_f64(Field::TrueCourse, i.true_course)?,
            true_airspeed: check_field_f64(Field::TrueAirspeed, i.true_airspeed)?,
            wind_direction: check_field_f64(Field::WindDirection, i.wind_direction)?,
            wind_speed: check_field_f64(Field::WindSpeed, i.wind_speed)?,
        })
    }
}

/// All three are `null` when the wind cannot be compensated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsWindResult {
    pub heading: Option<i32>,
    pub ground_speed: Option<i64>,
    pub wind_correction_angle: Option<i32>,
}

/// Validate and solve; the JS wrapper below only converts values.
pub fn solve_input(input: JsWindInput) -> Result<JsWindResult, InputError> {
    let triangle = WindTriangle::try_from(input)?;
    let solution = triangle.solve();

    Ok(JsWindResult {
        heading: solution.map(|s| s.heading),
        ground_speed: solution.map(|s| s.ground_speed),
        wind_correction_angle: solution.map(|s| s.wind_correction_angle(triangle.true_course)),
    })
}

/* ---------------------------- Wind triangle ----------------------------- */

#[wasm_bindgen]
pub fn solve_wind_triangle_js(input: JsValue) -> Result<JsValue, JsValue> {
    let inp: JsWindInput = swb::from_value(input)?;

    let out = solve_input(inp).map_err(|e| JsValue::from_str(&e.to_string()))?;

    swb::to_value(&out).map_err(|e| e.into())
}

/* -------------------------------- tests -------------------------------- */
