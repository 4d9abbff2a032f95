//! Guided ECG calculator: heart rate, axis, interval conversion and Bazett QTc
//! from measurements read off a paper tracing, plus worksheet reports.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::CalculatorConfig, worksheet::Worksheet};
pub use core::axis::classify_axis;
pub use core::engine::WorksheetEngine;
pub use core::interval::convert_to_ms;
pub use core::qtc::{compute_qtc, compute_qtc_with};
pub use core::rate::compute_rate;
pub use core::report::EcgReport;
pub use utils::error::{CalcError, Result};
