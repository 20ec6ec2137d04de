use crate::core::loader::RegisterLoader;
use crate::core::report::build_report;
use crate::core::{ConfigProvider, Pipeline, Register, Report, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct RegisterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RegisterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RegisterPipeline<S, C> {
    fn extract(&self) -> Result<Register> {
        tracing::debug!("Opening register: {}", self.config.input_path());
        let reader = self.storage.open(self.config.input_path())?;
        RegisterLoader::new().load(reader)
    }

    fn transform(&self, register: Register) -> Result<Report> {
        let format = self.config.report_format();
        tracing::debug!("Rendering {:?} report", format);
        build_report(&register, format)
    }

    fn load(&self, report: Report) -> Result<String> {
        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing report ({} bytes) to {}", report.body.len(), path);
                self.storage.write_file(path, report.body.as_bytes())?;
                Ok(path.to_string())
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(report.body.as_bytes())?;
                stdout.flush()?;
                Ok("stdout".to_string())
            }
        }
    }
}
