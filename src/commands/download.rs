use std::path::PathBuf;

use crate::core::action::DownloadConfig;
use crate::core::args::ParsedArgs;
use crate::core::config::Config;
use crate::core::download::Downloader;
use crate::core::platform::Host;
use crate::error::Result;
use crate::utils::fs;

pub fn download(args: &ParsedArgs, host: &Host, settings: &Config) -> Result<()> {
    let resolved = DownloadConfig::resolve(args, host, settings)?;
    let downloader = Downloader::new()?;
    download_archive(&resolved, &downloader)?;
    Ok(())
}

pub fn download_archive(resolved: &DownloadConfig, downloader: &Downloader) -> Result<PathBuf> {
    let destination = resolved.destination();
    fs::ensure_dir_exists(&resolved.download_dir)?;

    println!("Downloading {} to {}", resolved.url, destination.display());

    downloader.download_file(&resolved.url, &destination, &resolved.filename)?;

    println!(
        "\nDownloaded {} to {}",
        resolved.filename,
        resolved.download_dir.display()
    );
    Ok(destination)
}
