// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

/// Write an export string to `path`, creating parent directories as
/// needed. Returns the path written to.
pub fn write_export(path: &Path, contents: &str) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
