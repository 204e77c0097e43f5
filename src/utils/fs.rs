use crate::error::{InstallerError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => InstallerError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => InstallerError::from(e),
        })?;
    }
    Ok(())
}

/// Whether the current user may write into `path`.
pub fn is_writable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use nix::unistd::{access, AccessFlags};
        access(path, AccessFlags::W_OK).is_ok()
    }

    #[cfg(not(unix))]
    {
        path.metadata()
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }
}

pub fn ensure_writable(path: &Path) -> Result<()> {
    if is_writable(path) {
        Ok(())
    } else {
        Err(InstallerError::PermissionDenied {
            path: path.to_path_buf(),
        })
    }
}

/// Whether `dir` has a direct entry called `name`.
pub fn dir_contains(dir: &Path, name: &str) -> Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
pub(crate) fn running_as_root() -> bool {
    #[cfg(unix)]
    {
        nix::unistd::geteuid().is_root()
    }

    #[cfg(not(unix))]
    {
        false
    }
}
