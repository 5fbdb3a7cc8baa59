//! Leg parsing and output formatting for `heading-calc`.

use std::io::Write;

use anyhow::{Context, Result};
use heading_solver::{Solution, WindTriangle};
use serde::{Deserialize, Serialize};

/// Shown in place of heading/ground speed when the triangle has no solution.
pub const UNDEFINED_FIELD: &str = "---";

/// A leg as written in a legs file, before range checks.
#[derive(Debug, Deserialize)]
struct RawLeg {
    true_course: i64,
    true_airspeed: i64,
    wind_direction: i64,
    wind_speed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegReport {
    pub input: WindTriangle,
    pub solution: Option<Solution>,
    pub wind_correction_angle: Option<i32>,
}

impl LegReport {
    pub fn solve(input: WindTriangle) -> Self {
        let solution = input.solve();
        Self {
            input,
            solution,
            wind_correction_angle: solution.map(|s| s.wind_correction_angle(input.true_course)),
        }
    }
}

/// Parse a JSON array of legs, range-checking every field.
pub fn parse_legs(raw: &str) -> Result<Vec<WindTriangle>> {
    let legs: Vec<RawLeg> = serde_json::from_str(raw)?;
    legs.into_iter()
        .enumerate()
        .map(|(i, leg)| {
            WindTriangle::checked(
                leg.true_course,
                leg.true_airspeed,
                leg.wind_direction,
                leg.wind_speed,
            )
            .with_context(|| format!("leg {}", i + 1))
        })
        .collect()
}

pub fn write_table<W: Write>(out: &mut W, reports: &[LegReport]) -> Result<()> {
    writeln!(out, "{:>4} {:>4} {:>4} {:>4} | {:>4} {:>4} {:>4}", "TC", "TAS", "WD", "WS", "TH", "GS", "WCA")?;
    for r in reports {
        let t = &r.input;
        write!(
            out,
            "{:>4} {:>4} {:>4} {:>4} | ",
            t.true_course, t.true_airspeed, t.wind_direction, t.wind_speed
        )?;
        match (r.solution, r.wind_correction_angle) {
            (Some(s), Some(wca)) => {
                writeln!(out, "{:>4} {:>4} {:>+4}", s.heading, s.ground_speed, wca)?;
            }
            _ => {
                writeln!(out, "{UNDEFINED_FIELD:>4} {UNDEFINED_FIELD:>4} {UNDEFINED_FIELD:>4}")?;
            }
        }
    }
    Ok(())
}

/// One JSON object per line; `solution` is `null` when there is none.
pub fn write_json<W: Write>(out: &mut W, reports: &[LegReport]) -> Result<()> {
    for r in reports {
        serde_json::to_writer(&mut *out, r)?;
        writeln!(out)?;
    }
    Ok(())
}
