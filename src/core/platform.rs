//! Host platform description and the defaults derived from it.
//!
//! Everything platform-dependent is computed from a [`Host`] value so the
//! resolver and help output can be exercised for any OS without touching the
//! process environment.

use std::path::PathBuf;

use crate::core::build::Build;
use crate::error::{InstallerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Other(String),
}

impl Os {
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Os::Windows,
            "macos" => Os::MacOs,
            "linux" => Os::Linux,
            other => Os::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Host {
    pub os: Os,
    /// Rust target architecture name, e.g. `x86_64`.
    pub arch: String,
    pub home_dir: Option<PathBuf>,
    pub local_data_dir: Option<PathBuf>,
    pub current_dir: PathBuf,
}

impl Host {
    pub fn current() -> Result<Self> {
        Ok(Host {
            os: Os::current(),
            arch: std::env::consts::ARCH.to_string(),
            home_dir: dirs::home_dir(),
            local_data_dir: dirs::data_local_dir(),
            current_dir: std::env::current_dir()?,
        })
    }

    /// Identifier the download service uses to pick an archive.
    pub fn platform_id(&self) -> Result<String> {
        let arch = service_arch(&self.arch);
        match &self.os {
            Os::Windows => Ok(format!("win32-{arch}-archive")),
            Os::MacOs => Ok("darwin-universal".to_string()),
            Os::Linux => Ok(format!("linux-{arch}")),
            Os::Other(name) => Err(InstallerError::UnsupportedPlatform {
                platform: name.clone(),
            }),
        }
    }

    pub fn archive_extension(&self) -> &'static str {
        if self.os == Os::Linux {
            "tar.gz"
        } else {
            "zip"
        }
    }

    pub fn default_download_dir(&self) -> PathBuf {
        self.current_dir.join("downloads")
    }

    pub fn default_install_dir(&self, build: Build) -> Result<PathBuf> {
        match self.os {
            Os::Windows => {
                let base = self
                    .local_data_dir
                    .as_ref()
                    .ok_or(InstallerError::HomeDirectoryNotFound)?;
                let name = match build {
                    Build::Stable => "Microsoft VS Code",
                    Build::Insiders => "Microsoft VS Code Insiders",
                };
                Ok(base.join("Programs").join(name))
            }
            Os::Linux => Ok(PathBuf::from(match build {
                Build::Stable => "/usr/share/code",
                Build::Insiders => "/usr/share/code-insiders",
            })),
            _ => {
                let name = match build {
                    Build::Stable => "Visual Studio Code",
                    Build::Insiders => "Visual Studio Code - Insiders",
                };
                Ok(self.home()?.join("Applications").join(name))
            }
        }
    }

    pub fn default_symlink_dir(&self) -> Result<PathBuf> {
        if self.os == Os::Linux {
            Ok(PathBuf::from("/usr/bin"))
        } else {
            Ok(self.home()?.join("bin"))
        }
    }

    fn home(&self) -> Result<&PathBuf> {
        self.home_dir
            .as_ref()
            .ok_or(InstallerError::HomeDirectoryNotFound)
    }
}

/// Map Rust architecture names onto the service's vocabulary.
fn service_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "ia32",
        "arm" => "armhf",
        other => other,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn host(os: Os, arch: &str) -> Host {
        Host {
            os,
            arch: arch.to_string(),
            home_dir: Some(PathBuf::from("/home/dev")),
            local_data_dir: Some(PathBuf::from("/home/dev/AppData/Local")),
            current_dir: PathBuf::from("/work"),
        }
    }

    #[test]
    fn test_platform_ids() {
        assert_eq!(host(Os::Linux, "x86_64").platform_id().unwrap(), "linux-x64");
        assert_eq!(host(Os::Linux, "aarch64").platform_id().unwrap(), "linux-arm64");
        assert_eq!(host(Os::Linux, "arm").platform_id().unwrap(), "linux-armhf");
        assert_eq!(
            host(Os::Windows, "x86_64").platform_id().unwrap(),
            "win32-x64-archive"
        );
        assert_eq!(
            host(Os::MacOs, "aarch64").platform_id().unwrap(),
            "darwin-universal"
        );
        assert_eq!(
            host(Os::MacOs, "x86_64").platform_id().unwrap(),
            "darwin-universal"
        );
    }

    #[test]
    fn test_unsupported_platform() {
        let err = host(Os::Other("freebsd".into()), "x86_64")
            .platform_id()
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported platform: freebsd");
    }

    #[test]
    fn test_archive_extension() {
        assert_eq!(host(Os::Linux, "x86_64").archive_extension(), "tar.gz");
        assert_eq!(host(Os::MacOs, "x86_64").archive_extension(), "zip");
        assert_eq!(host(Os::Windows, "x86_64").archive_extension(), "zip");
    }

    #[test]
    fn test_default_directories() {
        let linux = host(Os::Linux, "x86_64");
        assert_eq!(
            linux.default_install_dir(Build::Insiders).unwrap(),
            PathBuf::from("/usr/share/code-insiders")
        );
        assert_eq!(linux.default_symlink_dir().unwrap(), PathBuf::from("/usr/bin"));
        assert_eq!(linux.default_download_dir(), PathBuf::from("/work/downloads"));

        let mac = host(Os::MacOs, "aarch64");
        assert_eq!(
            mac.default_install_dir(Build::Stable).unwrap(),
            PathBuf::from("/home/dev/Applications/Visual Studio Code")
        );
        assert_eq!(mac.default_symlink_dir().unwrap(), PathBuf::from("/home/dev/bin"));

        let windows = host(Os::Windows, "x86_64");
        assert_eq!(
            windows.default_install_dir(Build::Insiders).unwrap(),
            PathBuf::from("/home/dev/AppData/Local")
                .join("Programs")
                .join("Microsoft VS Code Insiders")
        );
    }

    #[test]
    fn test_missing_home_directory() {
        let mut mac = host(Os::MacOs, "x86_64");
        mac.home_dir = None;
        assert!(matches!(
            mac.default_symlink_dir(),
            Err(InstallerError::HomeDirectoryNotFound)
        ));
    }
}
