use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

/// New files get the usual 0o666 minus umask instead of tempfile's 0o600.
#[allow(unused_mut)]
fn staging_file(dir: &Path) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    Ok(builder.tempfile_in(dir)?)
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    /// Replaces `path` atomically: the data goes to a temporary sibling
    /// first, so a failed write leaves any existing file untouched.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let parent = match full_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut staged = staging_file(&parent)?;
        if let Ok(existing) = fs::metadata(&full_path) {
            staged.as_file().set_permissions(existing.permissions())?;
        }
        staged.write_all(data)?;
        staged.as_file().sync_all()?;

        staged
            .persist(&full_path)
            .map_err(|e| EtlError::IoError(e.error))?;
        Ok(())
    }
}
