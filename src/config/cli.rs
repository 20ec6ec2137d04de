use crate::core::Storage;
use crate::utils::error::{RegisterError, Result};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    type Reader = BufReader<File>;

    fn open(&self, path: &str) -> Result<Self::Reader> {
        let full_path = self.resolve(path);
        let file = File::open(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RegisterError::FileNotFound {
                path: full_path.display().to_string(),
            },
            _ => RegisterError::IoError(e),
        })?;
        Ok(BufReader::new(file))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
