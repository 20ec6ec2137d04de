pub mod engine;
pub mod loader;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Register, Report};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
