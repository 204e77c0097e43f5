use crate::error::{InstallerError, Result};
use std::path::Path;

/// Create a file symlink at `link` pointing to `target`. An existing entry at
/// `link` is left alone and reported as an error.
pub fn create_link(target: &Path, link: &Path) -> Result<()> {
    symlink_file(target, link).map_err(|source| InstallerError::SymlinkError {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
