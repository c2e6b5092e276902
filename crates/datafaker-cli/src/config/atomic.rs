use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigResult};

/// Write through a sibling `.tmp` file and rename it into place.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> ConfigResult<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    Ok(())
}

fn temp_path(path: &Path) -> ConfigResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    OpenOptions::new().read(true).open(path)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_file_without_leftovers() {
        let dir = std::env::temp_dir().join(format!("datafaker_atomic_{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("out.toml");
        write_bytes_atomic(&path, b"first").expect("first write");
        write_bytes_atomic(&path, b"second").expect("second write");
        assert_eq!(std::fs::read(&path).expect("read"), b"second");
        assert!(!path.with_file_name("out.toml.tmp").exists());
    }

    #[test]
    fn rejects_paths_without_file_name() {
        assert!(matches!(
            write_bytes_atomic(Path::new("/"), b"x"),
            Err(ConfigError::InvalidPath(_))
        ));
    }
}
