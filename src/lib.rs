pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use crate::core::{engine::RegisterEngine, loader::RegisterLoader, pipeline::RegisterPipeline};
pub use domain::model::{Course, EnrollmentWarning, Register, ReportFormat, Student};
pub use utils::error::{RegisterError, Result};
