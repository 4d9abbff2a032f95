pub mod axis;
pub mod batch;
pub mod engine;
pub mod findings;
pub mod interval;
pub mod qtc;
pub mod rate;
pub mod report;

pub use crate::domain::model::{
    AxisCategory, AxisInput, ClassificationResult, IntervalInput, Polarity, QtcCategory, QtcInput,
    QtcResult, RateInput, Sex,
};
pub use crate::domain::ports::{StandardThresholds, ThresholdProvider};
pub use crate::utils::error::Result;
