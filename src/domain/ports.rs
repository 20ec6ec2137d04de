use crate::domain::model::{Register, Report, ReportFormat};
use crate::utils::error::Result;
use std::io::BufRead;

pub trait Storage {
    type Reader: BufRead;

    /// Opens `path` for line-by-line reading. The handle is closed when the
    /// reader is dropped.
    fn open(&self, path: &str) -> Result<Self::Reader>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn report_format(&self) -> ReportFormat;
    /// `None` sends the report to stdout.
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Register>;
    fn transform(&self, register: Register) -> Result<Report>;
    fn load(&self, report: Report) -> Result<String>;
}
