pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::ReportFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Default register file, read from the working directory.
pub const DEFAULT_REGISTER_FILE: &str = "register.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "course-register")]
#[command(about = "Load a student/course register and print the enrollment report")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_REGISTER_FILE)]
    pub input: String,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[arg(long, help = "Write the report to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process statistics for each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_REGISTER_FILE.to_string(),
            format: ReportFormat::Text,
            output: None,
            verbose: false,
            monitor: false,
            log_json: false,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn report_format(&self) -> ReportFormat {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
