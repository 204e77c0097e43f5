//! Action resolution and per-action configuration.
//!
//! Each action builds its configuration from the parsed flags, the optional
//! settings file and the host defaults, in that order of precedence.

use std::path::PathBuf;

use chrono::Utc;
use clap::ValueEnum;
use log::debug;

use crate::core::args::{FlagValue, ParsedArgs};
use crate::core::build::Build;
use crate::core::config::Config;
use crate::core::platform::{Host, Os};
use crate::core::schema::{options, OptionSpec, Section};
use crate::error::{InstallerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Download,
    Install,
    Link,
    Help,
}

impl Action {
    /// Action switches win over `--action`, which wins over the default.
    pub fn resolve(args: &ParsedArgs) -> Result<Self> {
        if args.is_set(&options::DOWNLOAD) {
            return Ok(Action::Download);
        }
        if args.is_set(&options::INSTALL) {
            return Ok(Action::Install);
        }
        if args.is_set(&options::LINK) {
            return Ok(Action::Link);
        }
        if args.is_set(&options::HELP) {
            return Ok(Action::Help);
        }

        match args.lookup(&options::ACTION) {
            None => Ok(Action::Download),
            Some(FlagValue::Switch) => Err(InstallerError::InvalidAction {
                action: "true".to_string(),
            }),
            Some(FlagValue::Text(value)) => {
                <Action as ValueEnum>::from_str(value, false).map_err(|_| {
                    InstallerError::InvalidAction {
                        action: value.clone(),
                    }
                })
            }
        }
    }
}

pub fn resolve_section(args: &ParsedArgs) -> Result<Section> {
    match args.lookup(&options::SECTION) {
        None => Ok(Section::All),
        Some(FlagValue::Switch) => Err(InstallerError::InvalidSection {
            section: "(no value). If you want to see the sections, use --section=sections, -s=sections, or don't specify a section".to_string(),
        }),
        Some(FlagValue::Text(value)) => <Section as ValueEnum>::from_str(value, false)
            .map_err(|_| InstallerError::InvalidSection {
                section: value.clone(),
            }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    pub build: Build,
    pub platform_id: String,
    pub url: String,
    pub filename: String,
    pub download_dir: PathBuf,
}

impl DownloadConfig {
    pub fn resolve(args: &ParsedArgs, host: &Host, config: &Config) -> Result<Self> {
        let build = resolve_build(args, &options::DOWNLOAD_BUILD, config)?;
        let platform_id = host.platform_id()?;
        let url = download_url(config.download_url(), build, &platform_id);

        let filename = match args.text(&options::FILENAME)? {
            Some(name) => name.to_string(),
            None => default_filename(build, &platform_id, host, Utc::now().timestamp_millis()),
        };
        let download_dir = path_option(args, &options::DOWNLOAD_DIRECTORY)?
            .or_else(|| config.download_directory.clone())
            .unwrap_or_else(|| host.default_download_dir());

        let resolved = DownloadConfig {
            build,
            platform_id,
            url,
            filename,
            download_dir,
        };
        debug!("download configuration: {resolved:?}");
        Ok(resolved)
    }

    pub fn destination(&self) -> PathBuf {
        self.download_dir.join(&self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub file: PathBuf,
    pub build: Build,
    pub install_dir: PathBuf,
}

impl InstallConfig {
    pub fn resolve(args: &ParsedArgs, host: &Host, config: &Config) -> Result<Self> {
        let file = path_option(args, &options::FILE)?.ok_or_else(|| {
            InstallerError::MissingArgument {
                option: options::FILE.name(),
            }
        })?;

        let build = if args.is_set(&options::INSIDERS) {
            Build::Insiders
        } else if args.is_set(&options::STABLE) {
            Build::Stable
        } else {
            resolve_build(args, &options::INSTALL_BUILD, config)?
        };

        let install_dir = match path_option(args, &options::INSTALL_DIRECTORY)? {
            Some(dir) => dir,
            None => match &config.install_directory {
                Some(dir) => dir.clone(),
                None => host.default_install_dir(build)?,
            },
        };

        if !file.exists() {
            return Err(InstallerError::NotFound {
                kind: "File",
                path: file,
            });
        }

        let resolved = InstallConfig {
            file,
            build,
            install_dir,
        };
        debug!("install configuration: {resolved:?}");
        Ok(resolved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub build: Build,
    pub install_dir: PathBuf,
    pub symlink_dir: PathBuf,
}

impl LinkConfig {
    pub fn resolve(args: &ParsedArgs, host: &Host, config: &Config) -> Result<Self> {
        let build = resolve_build(args, &options::LINK_BUILD, config)?;

        let install_dir = match path_option(args, &options::LINK_INSTALL_DIRECTORY)? {
            Some(dir) => dir,
            None => match &config.install_directory {
                Some(dir) => dir.clone(),
                None => host.default_install_dir(build)?,
            },
        };
        let symlink_dir = match path_option(args, &options::SYMLINK_DIRECTORY)? {
            Some(dir) => dir,
            None => match &config.symlink_directory {
                Some(dir) => dir.clone(),
                None => host.default_symlink_dir()?,
            },
        };

        let resolved = LinkConfig {
            build,
            install_dir,
            symlink_dir,
        };
        debug!("link configuration: {resolved:?}");
        Ok(resolved)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.install_dir.join("bin")
    }

    pub fn is_noop(host: &Host) -> bool {
        host.os == Os::Windows
    }
}

pub fn download_url(base: &str, build: Build, platform_id: &str) -> String {
    format!("{base}?build={}&os={platform_id}", build.query_value())
}

pub fn default_filename(build: Build, platform_id: &str, host: &Host, timestamp_millis: i64) -> String {
    format!(
        "vscode-{build}-{platform_id}-{timestamp_millis}.{}",
        host.archive_extension()
    )
}

fn resolve_build(args: &ParsedArgs, spec: &OptionSpec, config: &Config) -> Result<Build> {
    match args.text(spec)? {
        Some(value) => Build::parse(value),
        None => Ok(config.build()?.unwrap_or_default()),
    }
}

fn path_option(args: &ParsedArgs, spec: &OptionSpec) -> Result<Option<PathBuf>> {
    Ok(args.text(spec)?.map(PathBuf::from))
}
