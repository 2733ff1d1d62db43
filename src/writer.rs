//! Writing the final config file.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConfgenError, ConfgenResult};

/// Default output path: `<user config dir>/fastfetch/config.jsonc`.
pub fn default_config_path() -> ConfgenResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("fastfetch").join("config.jsonc"))
        .ok_or(ConfgenError::ConfigDirNotFound)
}

/// Write `content` to `path` atomically, overwriting any existing file.
///
/// Parent directories are created as needed. Uses the tempfile+persist
/// pattern so a crash mid-write never leaves a truncated config behind.
pub fn write_config(path: &Path, content: &str) -> ConfgenResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(content.as_bytes())?;
    staged.persist(path).map_err(|err| ConfgenError::Io(err.error))?;
    Ok(())
}
