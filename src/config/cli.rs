use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes report files beneath a base directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("reports");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage.write_file("estimate.json", b"{}").unwrap();

        let full_path = base.join("estimate.json");
        assert_eq!(storage.full_path("estimate.json"), full_path);
        assert_eq!(fs::read(full_path).unwrap(), b"{}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("walls.csv", b"old").unwrap();
        storage.write_file("walls.csv", b"new").unwrap();

        assert_eq!(fs::read(temp_dir.path().join("walls.csv")).unwrap(), b"new");
    }
}
