use crate::domain::model::STANDARD_PAPER_SPEED_MM_PER_SEC;
use crate::domain::thresholds::{
    IntervalLimits, QtcCutoffTable, STANDARD_INTERVAL_LIMITS, STANDARD_QTC_CUTOFFS,
};

/// Source of the cutoff tables a worksheet is classified against.
pub trait ThresholdProvider {
    fn qtc_cutoffs(&self) -> &QtcCutoffTable;
    fn interval_limits(&self) -> &IntervalLimits;
    fn paper_speed_mm_per_sec(&self) -> f64;
}

/// Built-in clinical defaults at 25 mm/s.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardThresholds;

impl ThresholdProvider for StandardThresholds {
    fn qtc_cutoffs(&self) -> &QtcCutoffTable {
        &STANDARD_QTC_CUTOFFS
    }

    fn interval_limits(&self) -> &IntervalLimits {
        &STANDARD_INTERVAL_LIMITS
    }

    fn paper_speed_mm_per_sec(&self) -> f64 {
        STANDARD_PAPER_SPEED_MM_PER_SEC
    }
}
