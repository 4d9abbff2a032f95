use crate::config::substitute_env_vars;
use crate::domain::model::STANDARD_PAPER_SPEED_MM_PER_SEC;
use crate::domain::ports::ThresholdProvider;
use crate::domain::thresholds::{IntervalLimits, QtcCutoffTable};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_config_positive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cutoff tables and paper speed, overridable from a TOML file.
///
/// ```toml
/// [paper]
/// speed_mm_per_sec = 25.0
///
/// [qtc.female]
/// borderline_above_ms = 460.0
/// prolonged_above_ms = 480.0
///
/// [intervals]
/// qrs_wide_from_ms = 110.0
/// ```
///
/// Every section is optional; missing values keep the clinical defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub paper: PaperConfig,
    #[serde(default)]
    pub qtc: QtcCutoffTable,
    #[serde(default)]
    pub intervals: IntervalLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperConfig {
    #[serde(default = "default_paper_speed")]
    pub speed_mm_per_sec: f64,
}

fn default_paper_speed() -> f64 {
    STANDARD_PAPER_SPEED_MM_PER_SEC
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            speed_mm_per_sec: default_paper_speed(),
        }
    }
}

impl CalculatorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        Ok(config)
    }
}

impl ThresholdProvider for CalculatorConfig {
    fn qtc_cutoffs(&self) -> &QtcCutoffTable {
        &self.qtc
    }

    fn interval_limits(&self) -> &IntervalLimits {
        &self.intervals
    }

    fn paper_speed_mm_per_sec(&self) -> f64 {
        self.paper.speed_mm_per_sec
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        validate_config_positive("paper.speed_mm_per_sec", self.paper.speed_mm_per_sec)?;
        self.qtc.validate()?;
        self.intervals.validate()
    }
}
