//! Heart rate from square counts on standard 25 mm/s paper.
//!
//! Regular rhythms use the 300 rule (300 / large squares between R waves);
//! irregular rhythms count QRS complexes over six seconds and multiply by ten.

use crate::domain::model::RateInput;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_result, validate_positive};

/// Large squares per minute at 25 mm/s.
const LARGE_SQUARES_PER_MINUTE: f64 = 300.0;
/// Six-second strips per minute.
const STRIPS_PER_MINUTE: f64 = 10.0;

/// Calculates the heart rate in beats per minute.
///
/// # Arguments
///
/// * `input` - Rhythm regularity together with the matching square count.
///
/// # Returns
///
/// * `Result<f64>` - The heart rate in bpm.
///
/// # Errors
///
/// Returns `InvalidInput` for a regular rhythm whose large-square count is zero,
/// negative or not finite, or so small that the rate overflows.
pub fn compute_rate(input: &RateInput) -> Result<f64> {
    let bpm = match *input {
        RateInput::Regular {
            large_squares_between_beats,
        } => {
            let squares =
                validate_positive("large_squares_between_beats", large_squares_between_beats)?;
            validate_finite_result("heart_rate_bpm", LARGE_SQUARES_PER_MINUTE / squares)?
        }
        RateInput::Irregular { qrs_count_in_6_sec } => {
            f64::from(qrs_count_in_6_sec) * STRIPS_PER_MINUTE
        }
    };
    tracing::debug!(regular = input.rhythm_regular(), bpm, "computed heart rate");
    Ok(bpm)
}
