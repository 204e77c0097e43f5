use anyhow::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use tar::Archive;
use zip::ZipArchive;

use crate::error::InstallerError;

/// Unpack a `.tar.gz`, dropping the first `strip` path components of every entry.
pub fn extract_tar_gz(
    archive_path: &Path,
    destination: &Path,
    strip: usize,
) -> crate::error::Result<()> {
    unpack_tar_gz(archive_path, destination, strip).map_err(|e| InstallerError::ExtractionError {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Unpack a `.zip`, overwriting files that already exist.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> crate::error::Result<()> {
    unpack_zip(archive_path, destination).map_err(|e| InstallerError::ExtractionError {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn unpack_tar_gz(archive_path: &Path, destination: &Path, strip: usize) -> Result<()> {
    let file = File::open(archive_path)?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);
    archive.set_preserve_permissions(true);

    for entry in archive.entries()? {
        let mut entry = entry?;
        let entry_path = entry.path()?.into_owned();
        let relative = match strip_components(&entry_path, strip)? {
            Some(relative) => relative,
            None => continue,
        };

        let outpath = destination.join(relative);
        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)?;
        }
        entry.unpack(&outpath)?;
    }
    Ok(())
}

fn unpack_zip(archive_path: &Path, destination: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let outpath = match file.enclosed_name() {
            Some(path) => destination.join(path),
            None => continue,
        };

        if file.is_dir() {
            std::fs::create_dir_all(&outpath)?;
        } else {
            if let Some(p) = outpath.parent() {
                if !p.exists() {
                    std::fs::create_dir_all(p)?;
                }
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut file, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = file.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }
    Ok(())
}

/// `None` for entries that vanish after stripping (the top-level folder itself).
fn strip_components(path: &Path, strip: usize) -> Result<Option<PathBuf>> {
    let mut relative = PathBuf::new();
    for component in path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .skip(strip)
    {
        match component {
            Component::Normal(part) => relative.push(part),
            _ => anyhow::bail!("unsafe path in archive: {}", path.display()),
        }
    }

    if relative.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
        let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o755);
            header.set_cksum();
            builder.append_data(&mut header, name, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap();
    }

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        let options = zip::write::SimpleFileOptions::default();
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_tar_gz_strips_top_level_folder() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("code.tar.gz");
        write_tar_gz(
            &archive,
            &[
                ("VSCode-linux-x64/bin/code", b"#!/bin/sh\n"),
                ("VSCode-linux-x64/resources/app/package.json", b"{}"),
            ],
        );

        let target = temp.path().join("install");
        std::fs::create_dir(&target).unwrap();
        extract_tar_gz(&archive, &target, 1).unwrap();

        assert!(target.join("bin").join("code").is_file());
        assert!(target.join("resources/app/package.json").is_file());
        assert!(!target.join("VSCode-linux-x64").exists());
    }

    #[test]
    fn test_zip_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("code.zip");
        write_zip(
            &archive,
            &[("Code.exe", b"new binary"), ("resources/app/package.json", b"{}")],
        );

        let target = temp.path().join("install");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("Code.exe"), b"old").unwrap();

        extract_zip(&archive, &target).unwrap();

        assert_eq!(std::fs::read(target.join("Code.exe")).unwrap(), b"new binary");
        assert!(target.join("resources/app/package.json").is_file());
    }

    #[test]
    fn test_corrupt_archive_reports_extraction_error() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("broken.zip");
        std::fs::write(&archive, b"not a zip").unwrap();

        let err = extract_zip(&archive, temp.path()).unwrap_err();
        assert!(matches!(err, InstallerError::ExtractionError { .. }));
    }

    #[test]
    fn test_strip_components() {
        assert_eq!(strip_components(Path::new("VSCode/bin/code"), 1).unwrap(), Some(PathBuf::from("bin/code")));
        assert_eq!(strip_components(Path::new("./VSCode/bin"), 1).unwrap(), Some(PathBuf::from("bin")));
        assert_eq!(strip_components(Path::new("VSCode/"), 1).unwrap(), None);
        assert!(strip_components(Path::new("VSCode/../../etc/passwd"), 1).is_err());
    }
}
