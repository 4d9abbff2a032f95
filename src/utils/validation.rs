use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects zero, negative and non-finite measurements.
pub fn validate_positive(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field_name, value, "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field_name, value, "Value must be greater than zero"));
    }
    Ok(value)
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field_name, value, "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(field_name, value, "Value cannot be negative"));
    }
    Ok(value)
}

/// Rejects a derived value that overflowed to infinity or became NaN.
pub fn validate_finite_result(field_name: &str, result: f64) -> Result<f64> {
    if !result.is_finite() {
        return Err(CalcError::invalid_input(
            field_name,
            result,
            "Inputs are out of range: the result is not a finite number",
        ));
    }
    Ok(result)
}

pub fn validate_config_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

/// Checks that a lower threshold does not exceed its upper counterpart.
pub fn validate_ordered(field_name: &str, lower: f64, upper: f64) -> Result<()> {
    if lower > upper {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} > {}", lower, upper),
            reason: "Lower threshold must not exceed upper threshold".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
