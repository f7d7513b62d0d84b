use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `-` 代表從 stdin 讀取
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: STDIN_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
    pub emit_normalized: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            emit_normalized: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub fail_on_invalid: bool,
}

impl CheckConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| FormatError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${SITE_INPUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| FormatError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn reads_stdin(&self) -> bool {
        self.input.path == STDIN_PATH
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CheckConfig::from_toml_str("").unwrap();

        assert!(config.reads_stdin());
        assert!(!config.output.pretty);
        assert!(config.output.emit_normalized);
        assert!(!config.validation.fail_on_invalid);
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "sites.json"

[output]
pretty = true
emit_normalized = false

[validation]
fail_on_invalid = true
"#;

        let config = CheckConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.path, "sites.json");
        assert!(config.output.pretty);
        assert!(!config.output.emit_normalized);
        assert!(config.validation.fail_on_invalid);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PF_TEST_SITE_INPUT", "/data/boz.json");

        let config = CheckConfig::from_toml_str(
            r#"
[input]
path = "${PF_TEST_SITE_INPUT}"
"#,
        )
        .unwrap();
        assert_eq!(config.input.path, "/data/boz.json");

        std::env::remove_var("PF_TEST_SITE_INPUT");
    }

    #[test]
    fn test_unknown_env_var_is_left_alone() {
        let config = CheckConfig::from_toml_str(
            r#"
[input]
path = "${PF_TEST_NOT_SET_ANYWHERE}"
"#,
        )
        .unwrap();
        assert_eq!(config.input.path, "${PF_TEST_NOT_SET_ANYWHERE}");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CheckConfig::from_toml_str("[output\npretty = yes").unwrap_err();
        assert!(matches!(err, FormatError::Config { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = CheckConfig::from_toml_str("[input]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npretty = true\n")
            .unwrap();

        let config = CheckConfig::from_file(temp_file.path()).unwrap();
        assert!(config.output.pretty);
    }
}
