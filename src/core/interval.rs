use crate::domain::model::{IntervalInput, STANDARD_PAPER_SPEED_MM_PER_SEC};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_result, validate_non_negative, validate_positive};

/// Duration of one small square (1 mm) at 25 mm/s.
const MS_PER_SMALL_SQUARE_AT_STANDARD_SPEED: f64 = 40.0;

/// Converts a small-square count to milliseconds at the given paper speed.
///
/// # Errors
///
/// `InvalidInput` when the paper speed is not positive, the square count is
/// negative, or the duration overflows.
pub fn convert_to_ms(input: &IntervalInput) -> Result<f64> {
    let speed = validate_positive("paper_speed_mm_per_sec", input.paper_speed_mm_per_sec)?;
    let squares = validate_non_negative("small_squares", input.small_squares)?;

    let ms_per_square =
        MS_PER_SMALL_SQUARE_AT_STANDARD_SPEED * (STANDARD_PAPER_SPEED_MM_PER_SEC / speed);
    validate_finite_result("milliseconds", squares * ms_per_square)
}
