#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;
pub mod worksheet;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::utils::error::{CalcError, Result};
use regex::Regex;

/// 替換環境變數 (例如 ${ECG_QTC_MALE_LIMIT})
///
/// Unset variables are left as written so the TOML parser reports them in context.
pub(crate) fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
