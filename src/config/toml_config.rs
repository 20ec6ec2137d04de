use crate::config::DEFAULT_REGISTER_FILE;
use crate::core::ConfigProvider;
use crate::domain::model::ReportFormat;
use crate::utils::error::{RegisterError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub register: Option<RegisterSection>,
    #[serde(default)]
    pub report: ReportSection,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSection {
    #[serde(default = "default_input_path")]
    pub input_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub format: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

fn default_input_path() -> String {
    DEFAULT_REGISTER_FILE.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RegisterError::FileNotFound {
                path: path.as_ref().display().to_string(),
            },
            _ => RegisterError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegisterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REGISTER_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegisterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let register = validation::validate_required_field("register", &self.register)?;
        validation::validate_path("register.input_path", &register.input_path)?;

        if let Some(output) = &self.report.output_path {
            validation::validate_path("report.output_path", output)?;
        }

        if let Some(format) = &self.report.format {
            validation::validate_one_of("report.format", format, &ReportFormat::ALL)?;
        }

        if let Some(level) = self.monitoring.as_ref().and_then(|m| m.log_level.as_deref()) {
            validation::validate_non_empty_string("monitoring.log_level", level)?;
            validation::validate_one_of(
                "monitoring.log_level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_level.as_deref())
            .unwrap_or("info")
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        // 缺少 [register] 已由 validate_config 擋下
        self.register
            .as_ref()
            .map(|r| r.input_path.as_str())
            .unwrap_or(DEFAULT_REGISTER_FILE)
    }

    fn report_format(&self) -> ReportFormat {
        // 非法格式已由 validate_config 擋下
        self.report
            .format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.report.output_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[register]
input_path = "data/register.txt"

[report]
format = "json"
output_path = "out/report.json"

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/register.txt");
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert_eq!(config.output_path(), Some("out/report.json"));
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = TomlConfig::from_toml_str("[register]\n").unwrap();

        assert_eq!(config.input_path(), "register.txt");
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(config.output_path().is_none());
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COURSE_REGISTER_TEST_DIR", "/tmp/fall");

        let toml_content = r#"
[register]
input_path = "${COURSE_REGISTER_TEST_DIR}/register.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/tmp/fall/register.txt");

        std::env::remove_var("COURSE_REGISTER_TEST_DIR");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let config =
            TomlConfig::from_toml_str("[register]\ninput_path = \"${COURSE_REGISTER_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(config.input_path(), "${COURSE_REGISTER_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[register]
input_path = "register.txt"

[report]
format = "xml"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(RegisterError::InvalidConfigValueError { ref field, .. })
                if field == "report.format"
        ));
    }

    #[test]
    fn test_missing_register_table_fails_validation() {
        let config = TomlConfig::from_toml_str("[report]\nformat = \"text\"\n").unwrap();

        assert!(config.register.is_none());
        assert!(matches!(
            config.validate(),
            Err(RegisterError::MissingConfigError { ref field }) if field == "register"
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = TomlConfig::from_toml_str("[register\ninput_path = 3\n").unwrap_err();
        assert!(matches!(err, RegisterError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[register]\ninput_path = \"spring.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "spring.txt");
    }
}
